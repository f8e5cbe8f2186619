pub mod definition;
pub mod descriptor;
pub mod namespace;
pub mod vocabulary;
