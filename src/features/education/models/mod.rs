mod education_topic;

pub use education_topic::EducationTopic;
