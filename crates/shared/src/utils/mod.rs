mod key_code;
mod logs;
mod random_string;
mod shutdown;
mod template;

pub use self::key_code::generate_key_code;
pub use self::logs::init_logger;
pub use self::random_string::generate_random_string;
pub use self::shutdown::shutdown_signal;
pub use self::template::{EmailTemplate, EmailTemplateData, render_email};

#[cfg(test)]
mod key_code_test;
#[cfg(test)]
mod template_test;
