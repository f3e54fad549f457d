pub mod application {
    pub mod fetch {
        pub mod fetcher;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod fetch {
        pub mod http;
        pub mod services;
        pub mod use_cases {
            pub mod fetch;
        }
    }
    pub mod item {
        pub mod model;
    }
    pub mod list {
        pub mod model;
    }
    pub mod receipt {
        pub mod model;
        pub mod value_objects;
    }
    pub mod shared {
        pub mod date;
        pub mod value_objects;
    }
}
