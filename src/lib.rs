pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod transitions {
        pub mod core {
            pub mod decision;
            pub mod event;
        }
        pub mod use_cases {
            pub mod handle_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod json;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod policy;
                pub mod policy_rule_book;
            }
        }
    }
}

pub mod shell;
