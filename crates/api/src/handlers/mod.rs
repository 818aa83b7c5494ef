pub mod courses;
pub mod enrollments;
pub mod lectures;
pub mod reviews;
pub mod topics;
pub mod users;
