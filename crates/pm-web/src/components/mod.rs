mod alert;
mod copy_button;
mod lightbox;
mod photo_card;
mod section;

pub use alert::FlashAlert;
pub use copy_button::CopyButton;
pub use lightbox::Lightbox;
pub use photo_card::PhotoCard;
pub use section::Section;
