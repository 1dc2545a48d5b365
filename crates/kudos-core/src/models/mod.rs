pub mod letter;
pub mod recipient;
