pub mod banner;
pub mod carousel;
pub mod hours;
pub mod offers;
pub mod password;
pub mod slug;
