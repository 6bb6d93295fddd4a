pub mod links;
pub mod login;
pub mod title;

#[cfg(test)]
mod tests;
