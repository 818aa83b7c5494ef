pub mod course;
pub mod enrollment;
pub mod lecture;
pub mod lecture_progress;
pub mod review;
pub mod topic;
pub mod user;
