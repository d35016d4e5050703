#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod bundled;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;

#[cfg(test)]
mod tests {
    pub mod data;
}
