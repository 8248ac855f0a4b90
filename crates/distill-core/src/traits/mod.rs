mod teacher_output;

pub use teacher_output::ITeacherOutput;
