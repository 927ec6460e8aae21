pub mod emailjs;

pub use emailjs::EmailJsProvider;
