use serde::{Deserialize, Serialize};

pub mod get_service_status {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
    }
}
