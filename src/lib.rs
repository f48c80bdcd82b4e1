pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod file_store;
    }
}

pub mod modules {
    pub mod portfolio {
        pub mod core {
            pub mod chat;
            pub mod embedded_image;
            pub mod gallery;
            pub mod project;
            pub mod session;
            pub mod snapshot_codec;
            pub mod state;
            pub mod store;
        }
        pub mod use_cases {
            pub mod load_published_snapshot {
                pub mod handler;
            }
            pub mod browse_gallery {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod sign_in {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_projects {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod save_snapshot {
                pub mod handler;
                pub mod sync_client;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod revert_to_remote {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod ask_assistant {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod assistant;
                pub mod assistant_gemini;
                pub mod assistant_in_memory;
                pub mod published_snapshot;
                pub mod published_snapshot_http;
                pub mod published_snapshot_in_memory;
            }
        }
    }
}

pub mod shell;
