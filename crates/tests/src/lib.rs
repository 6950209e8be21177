#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod error_tests;

#[cfg(test)]
mod form_tests;

#[cfg(test)]
mod submission_tests;
