pub mod db;
pub mod exam;

#[cfg(test)]
mod tests;
