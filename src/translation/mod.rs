// Translation pipeline - validation, prompt rendering and the generation call
// Author: kelexine (https://github.com/kelexine)

pub mod prompt;
pub mod translator;
pub mod validator;

pub use prompt::build_prompt;
pub use translator::{TextGenerator, Translator};
pub use validator::{validate, ValidationError};
