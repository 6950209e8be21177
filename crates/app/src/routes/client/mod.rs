pub mod forms_fill;
pub mod forms_list;
pub mod my_submissions;
