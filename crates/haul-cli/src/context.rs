use crate::privilege;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub elevated: bool,
}

impl AppContext {
    pub fn load() -> Self {
        Self {
            elevated: privilege::is_elevated(),
        }
    }
}
