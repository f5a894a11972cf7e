//! Zip packaging of generated output plus optional scaffolding.

use std::io::{Cursor, Write};

use tracing::debug;
use trellis_core::{Component, DeployPlatform, ExportError, ExportOptions};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::pipeline::generate_site;
use crate::scaffold;

/// A packaged export: archive bytes plus the file name to deliver them under.
#[derive(Debug, Clone)]
pub struct ProjectArchive {
    /// Suggested file name, `<slug>.zip`.
    pub file_name: String,
    /// Zip archive bytes. Persisting them is the caller's concern.
    pub data: Vec<u8>,
}

/// Generate the site and package it into a zip archive.
///
/// The archive always contains `index.html` and `styles.css`. With
/// `include_config` set it additionally carries the package manifest, readme,
/// ignore file, and the platform deploy descriptor (none for `static`).
/// This is the pipeline's only fatal error path; generation itself degrades
/// gracefully and cannot fail.
pub fn export_project(
    tree: &[Component],
    project_name: &str,
    options: &ExportOptions,
) -> Result<ProjectArchive, ExportError> {
    let site = generate_site(tree, project_name, &options.generate);

    let mut members: Vec<(&str, String)> = vec![
        ("index.html", site.full_page),
        ("styles.css", site.css),
    ];

    if options.include_config {
        members.push(("package.json", scaffold::package_manifest(project_name)));
        members.push(("README.md", scaffold::readme(project_name)));
        members.push((".gitignore", scaffold::gitignore()));
        match options.platform {
            DeployPlatform::Vercel => members.push(("vercel.json", scaffold::vercel_config())),
            DeployPlatform::Netlify => members.push(("netlify.toml", scaffold::netlify_config())),
            DeployPlatform::Static => {}
        }
    }

    let buffer = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(buffer);

    let file_options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, content) in &members {
        zip.start_file(*name, file_options.clone())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        zip.write_all(content.as_bytes())?;
    }

    let result = zip
        .finish()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let file_name = format!("{}.zip", scaffold::project_slug(project_name));
    debug!(file = %file_name, members = members.len(), "archive packaged");

    Ok(ProjectArchive {
        file_name,
        data: result.into_inner(),
    })
}
