pub mod error_diffusion;
