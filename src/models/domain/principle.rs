use serde::Serialize;

/// One fixed evaluation criterion and the instruction sent to the model for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}
