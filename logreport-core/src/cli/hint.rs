use crate::conf::ConfigError;

pub fn print_config_error(err: &ConfigError) {
    eprintln!("error: {err}");
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::NoInput => Some(
            "Choose what to analyze with exactly one of:\n\
             \n\
             logreport --file access.log\n\
             logreport --folder /var/log/nginx",
        ),

        ConfigError::InvalidExtension { .. } => Some(
            "Only files ending in .log are read.\n\
             \n\
             Rename the file or point --folder at the directory that contains it.",
        ),

        ConfigError::NoLogFiles { .. } => Some(
            "Folders are scanned for *.log files directly inside them; subdirectories are not searched.",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
