//! Project scaffolding written into exported archives.
//!
//! These are fixed templates: a package manifest wired for Vite, a readme
//! with serve/build/deploy instructions, an ignore file, and per-platform
//! deploy descriptors. Everything is deterministic text.

use serde_json::Value;

/// Slug form of a project name: lower-cased, whitespace runs joined with
/// single hyphens. Used for the archive file name and the manifest name.
pub(crate) fn project_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    lowered.split_whitespace().collect::<Vec<&str>>().join("-")
}

/// `package.json` with dev/build/preview scripts (Vite) and a plain serve
/// script that needs no install step.
pub(crate) fn package_manifest(project_name: &str) -> String {
    // JSON-escape the slug; project names are caller input.
    let name = Value::String(project_slug(project_name)).to_string();

    format!(
        r#"{{
  "name": {name},
  "private": true,
  "version": "1.0.0",
  "scripts": {{
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview",
    "serve": "npx serve ."
  }},
  "devDependencies": {{
    "vite": "^5.4.0"
  }}
}}
"#
    )
}

pub(crate) fn readme(project_name: &str) -> String {
    format!(
        r#"# {project_name}

This site was built with Trellis. The exported files are plain HTML and CSS
and can be served from any static host.

## Preview locally

```bash
npx serve .
```

Or, with the dev server:

```bash
npm install
npm run dev
```

## Build

```bash
npm run build
```

## Deploy

Upload the contents of this folder to any static host, or connect the
project to Vercel or Netlify for automatic deploys.
"#
    )
}

pub(crate) fn gitignore() -> String {
    "node_modules\ndist\n.DS_Store\n*.local\n.vercel\n.netlify\n".to_string()
}

/// Vercel deploy descriptor: static build with a catch-all route.
pub(crate) fn vercel_config() -> String {
    r#"{
  "version": 2,
  "builds": [{ "src": "**/*", "use": "@vercel/static" }],
  "routes": [{ "src": "/(.*)", "dest": "/index.html" }]
}
"#
    .to_string()
}

/// Netlify deploy descriptor: publish from the archive root with a
/// catch-all redirect.
pub(crate) fn netlify_config() -> String {
    r#"[build]
  publish = "."

[[redirects]]
  from = "/*"
  to = "/index.html"
  status = 200
"#
    .to_string()
}
