pub mod clients;
pub mod dashboard;
pub mod forms;
pub mod submissions;
