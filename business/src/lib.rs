pub mod application {
    pub mod completion {
        pub mod generate;
    }
    pub mod engine {
        pub mod list;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod completion {
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod engine {
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod list;
        }
    }
}
