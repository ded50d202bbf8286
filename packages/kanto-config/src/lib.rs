mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Acquire, Config, Query, Service, Upstream};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.upstream.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "upstream.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.upstream.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "upstream.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.upstream.language.trim().is_empty() {
		return Err(Error::Validation {
			message: "upstream.language must be non-empty.".to_string(),
		});
	}

	for (label, path) in [
		("upstream.creature_path", &cfg.upstream.creature_path),
		("upstream.species_path", &cfg.upstream.species_path),
	] {
		if !path.starts_with('/') {
			return Err(Error::Validation {
				message: format!("{label} must start with a slash."),
			});
		}
	}

	if cfg.acquire.total == 0 {
		return Err(Error::Validation {
			message: "acquire.total must be greater than zero.".to_string(),
		});
	}
	if cfg.acquire.batch_size == 0 {
		return Err(Error::Validation {
			message: "acquire.batch_size must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	while cfg.upstream.api_base.ends_with('/') {
		cfg.upstream.api_base.pop();
	}
}
