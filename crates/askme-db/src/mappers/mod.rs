//! Entity <-> model mappers

mod answer;
mod comment;
mod friendship;
mod question;
mod user;
