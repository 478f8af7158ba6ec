mod model_ext;
mod soft_delete;

pub use model_ext::*;
pub use soft_delete::*;
