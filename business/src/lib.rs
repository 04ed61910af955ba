pub mod application {
    pub mod item {
        pub mod delete;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod patch;
        pub mod repository;
        pub mod validation;
        pub mod value_objects;
        pub mod use_cases {
            pub mod delete;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
