mod course_repo;
mod enrollment_repo;
mod lecture_repo;
mod progress_repo;
mod review_repo;
mod topic_repo;
mod user_repo;

pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use lecture_repo::LectureRepo;
pub use progress_repo::ProgressRepo;
pub use review_repo::ReviewRepo;
pub use topic_repo::TopicRepo;
pub use user_repo::UserRepo;
