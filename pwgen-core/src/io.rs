use std::fs::File;
use std::io::Read;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::{env, io};

/// Environment variable naming an explicit settings file.
pub(crate) const CONFIG_ENV: &str = "PWGEN_CONFIG";

/// Settings file looked up in the working directory when nothing else is given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "pwgen.toml";

/// Reads a whole text file.
///
/// - Returns `Ok(None)` if the file does not exist
/// - Any other I/O failure is returned as an error
pub(crate) fn read_optional_file<P: AsRef<Path>>(filename: P) -> io::Result<Option<String>> {
	let mut contents = String::new();
	match File::open(filename) {
		Ok(mut file) => {
			file.read_to_string(&mut contents)?;
			Ok(Some(contents))
		}
		Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
		Err(e) => Err(e),
	}
}

/// Resolves which settings file to read.
///
/// Order: the explicit path, then `$PWGEN_CONFIG`, then `./pwgen.toml`
/// relative to the current working directory.
pub(crate) fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
	resolve_config_path_from(explicit, env::var_os(CONFIG_ENV), env::current_dir().ok())
}

/// `resolve_config_path` with the environment value and working directory passed in.
fn resolve_config_path_from(explicit: Option<&Path>, from_env: Option<OsString>, cwd: Option<PathBuf>) -> PathBuf {
	if let Some(path) = explicit {
		return path.to_path_buf();
	}
	if let Some(path) = from_env.filter(|p| !p.is_empty()) {
		return PathBuf::from(path);
	}
	cwd.unwrap_or_else(|| PathBuf::from(".")).join(DEFAULT_CONFIG_FILE)
}
