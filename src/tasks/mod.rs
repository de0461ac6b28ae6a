pub mod doctor;
pub mod package;
pub mod publish;
pub mod restore;
