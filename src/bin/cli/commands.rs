//! Command implementation for the CLI tool.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use iconlib::transfer::{self, Credentials, UploadReport, UploadSession};
use iconlib::{
    AddOptions, IconLibrary, IndexPolicy, WORKING_COPY, add_icons_to_library, compile_icons,
    find_icon_library,
};

use crate::OutputFormat;
use crate::exit_codes::{ExitCode, error_to_exit_code};
use crate::output::{OutputFormatter, create_formatter};
use crate::progress::TransferProgress;
use crate::prompt::{confirm_reboot, prompt_credentials};

/// Configuration for a run.
pub struct RunConfig<'a> {
    pub icons: &'a str,
    pub library: Option<&'a Path>,
    pub languages: &'a [String],
    pub tags: &'a [String],
    pub force: bool,
    pub overwrite: bool,
    pub miniserver: Option<&'a str>,
    pub remote_path: &'a str,
    pub auto_index: bool,
    pub line: bool,
    pub filled: bool,
    pub format: OutputFormat,
}

/// Adds the icons, optionally pushes the library, and reports.
pub fn run(config: &RunConfig<'_>) -> ExitCode {
    let formatter = create_formatter(config.format);
    let human = config.format == OutputFormat::Human;

    let Some(original) = config.library.map(Path::to_path_buf).or_else(find_icon_library) else {
        eprintln!("Error: no Loxone Config installation found; pass --library");
        return ExitCode::BadArgs;
    };

    let target = match working_target(&original, Path::new(WORKING_COPY), config.overwrite) {
        Ok(path) => path,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            eprintln!("Error: {}", e);
            return ExitCode::BadArgs;
        }
        Err(e) => {
            eprintln!("Error copying {}: {}", original.display(), e);
            return ExitCode::IoError;
        }
    };
    if human && !config.overwrite {
        println!("Saving copy: {}", WORKING_COPY);
    }
    tracing::debug!(library = %target.display(), "editing");

    let policy = if config.auto_index {
        IndexPolicy::AutoIndex
    } else {
        IndexPolicy::RequirePrefix
    };
    let icons = match compile_icons(config.icons, policy) {
        Ok(icons) => icons,
        Err(e) => {
            eprintln!("Error: {}", e);
            return error_to_exit_code(&e);
        }
    };
    println!("{}", formatter.format_matched(config.icons, icons.len()).trim_end());

    let options = AddOptions::new()
        .languages(catalog_languages(config.languages))
        .tags(config.tags.iter().cloned())
        .line(config.line)
        .filled(config.filled)
        .force(config.force);

    let result = IconLibrary::open_path(&target).and_then(|mut library| {
        let report = add_icons_to_library(&mut library, &icons, &options)?;
        if report.has_changes() {
            library.save_path(&target)?;
        }
        Ok(report)
    });
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error updating {}: {}", target.display(), e);
            return error_to_exit_code(&e);
        }
    };
    print!("{}", ensure_newline(formatter.format_add_report(&target, &report)));

    if let Some(host) = config.miniserver {
        let pushed = push_to_device(host, &target, config.remote_path, formatter.as_ref(), human);
        if let Err(code) = pushed {
            return code;
        }
    }

    if human {
        if !config.overwrite {
            println!(
                "You should now copy {} to: {}\n  and update the Miniserver. Both Loxone Config and the Miniserver should have the\n  same copy of the library to ensure the custom icons are available in the app.",
                WORKING_COPY,
                original.display()
            );
        }
        println!("Done.");
    }

    ExitCode::Success
}

/// Base catalog first, then each requested language once.
fn catalog_languages(requested: &[String]) -> Vec<String> {
    let mut languages = vec![String::new()];
    for lang in requested {
        if !languages.contains(lang) {
            languages.push(lang.clone());
        }
    }
    languages
}

/// Picks the file to edit. With `overwrite` that is the original; otherwise
/// the original is copied to `copy` first. Refuses when `copy` already is the
/// original, since editing it would defeat the copy.
fn working_target(original: &Path, copy: &Path, overwrite: bool) -> io::Result<PathBuf> {
    if overwrite {
        return Ok(original.to_path_buf());
    }
    let same_file = match (fs::canonicalize(original), fs::canonicalize(copy)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    if same_file {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "{} is the library itself; pass --overwrite or run from another directory",
                copy.display()
            ),
        ));
    }
    fs::copy(original, copy)?;
    Ok(copy.to_path_buf())
}

/// Uploads the library and offers a reboot. Upload failures are reported
/// and do not stop the reboot prompt; reboot failures do.
fn push_to_device(
    host: &str,
    library: &Path,
    remote_path: &str,
    formatter: &dyn OutputFormatter,
    human: bool,
) -> Result<(), ExitCode> {
    if human {
        println!("Connecting to miniserver: {}", host);
    }
    let Some(credentials) = prompt_credentials() else {
        eprintln!("Upload cancelled");
        return Ok(());
    };

    match upload_with_progress(host, library, remote_path, &credentials, human) {
        Ok(report) => {
            let text = formatter.format_upload(host, remote_path, &report);
            println!("{}", text.trim_end());
        }
        Err(e) => eprintln!("Upload failed: {}", e),
    }

    if confirm_reboot() {
        match transfer::reboot(host, &credentials) {
            Ok(body) => println!("{}", body.trim_end()),
            Err(e) => {
                eprintln!("Reboot failed: {}", e);
                return Err(error_to_exit_code(&e));
            }
        }
    }

    Ok(())
}

/// Opens the session, shows the banner, then streams the file.
fn upload_with_progress(
    host: &str,
    library: &Path,
    remote_path: &str,
    credentials: &Credentials,
    human: bool,
) -> iconlib::Result<UploadReport> {
    let file = File::open(library)?;
    let size = file.metadata()?.len();

    let mut session = UploadSession::connect(host, credentials)?;
    if human {
        if let Some(welcome) = session.welcome() {
            println!("{}", welcome);
        }
    }

    let progress = TransferProgress::new(size, !human);
    progress.set_message(format!("Uploading to {}", host));
    let mut reader = progress.wrap_read(BufReader::new(file));

    let result = session.store(remote_path, &mut reader);
    match &result {
        Ok(_) => progress.finish(),
        Err(_) => progress.abandon_with_message("failed"),
    }
    let welcome = session.welcome().map(str::to_string);
    session.close();
    Ok(UploadReport {
        welcome,
        bytes: result?,
    })
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
