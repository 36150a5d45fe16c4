#[cfg(test)]
mod fixture;
pub use fixture::Fixture;

#[cfg(test)]
mod heredity_runner;
pub use heredity_runner::HeredityRunnerBuilder;

#[macro_export]
macro_rules! validate_file {
    ($ref_file:expr, $obtained_file:expr) => {
        let want = include_str!($ref_file);
        let got  = std::fs::read_to_string($obtained_file)
            .unwrap_or_else(|_| panic!("Failed to open {:?}", $obtained_file));
        assert_eq!(want, got)
    };
}
