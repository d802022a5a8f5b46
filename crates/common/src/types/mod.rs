use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Bare `{"result": "..."}` acknowledgement used by delete-style endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: String,
}

impl Outcome {
    pub fn success() -> Self {
        Self { result: "success".into() }
    }
}
