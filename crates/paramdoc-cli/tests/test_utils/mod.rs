//! Test utilities for paramdoc CLI integration tests

// Internal imports (std, crate)
use std::fs;
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use anyhow::Context;
use tempfile::TempDir;

/// Creates a temporary directory for test inputs
pub fn create_temp_dir() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let temp_path = temp_dir.path().to_path_buf();
    Ok((temp_dir, temp_path))
}

/// Creates a metadata file describing a small blog API
pub fn create_test_metadata(dir: &Path) -> anyhow::Result<PathBuf> {
    let metadata_path = dir.join("metadata.yaml");
    let metadata_content = r#"
types:
  Illuminate\Http\Request: {}
  App\Models\Post: {}
  App\Http\Requests\Post\CreateRequest:
    ancestors: [Illuminate\Foundation\Http\FormRequest]
    doc_comment: |
      /**
       * @bodyParam title string required The title.
       * @bodyParam views integer The view count. No-example
       * @bodyParam tags string[] Tags for the post.
       */
  App\Http\Requests\UpdatePostRequest:
    ancestors: [Illuminate\Foundation\Http\FormRequest]
    doc_comment: |
      /**
       * @bodyParam body string required
       * @bodyParam pinned bool Pin the post. Example: false
       */
  App\Http\Controllers\PostController:
    ancestors: [IgnitionWolf\API\Controllers\EntityController]
    static_properties:
      entity: App\Models\Post
  App\Http\Controllers\CommentController: {}

endpoints:
  - route: POST /posts
    controller: App\Http\Controllers\PostController
    method: store
    parameters:
      - name: request
        type: Illuminate\Http\Request
    doc_comment: |
      /**
       * Create a post.
       *
       * @bodyParam ignored string Never used.
       */
  - route: PUT /posts/{id}
    controller: App\Http\Controllers\CommentController
    method: update
    parameters:
      - name: request
        type: App\Http\Requests\UpdatePostRequest
      - name: id
    doc_comment: |
      /**
       * @urlParam id string required The id of the post.
       * @urlParam page The page number.
       */
  - route: DELETE /comments/{id}
    controller: App\Http\Controllers\CommentController
    method: destroy
    parameters:
      - name: id
"#;

    fs::write(&metadata_path, metadata_content)
        .with_context(|| format!("Failed to write {}", metadata_path.display()))?;
    Ok(metadata_path)
}

/// Creates a configuration file with a custom seed
pub fn create_test_config(dir: &Path, seed: u64) -> anyhow::Result<PathBuf> {
    let config_path = dir.join("paramdoc.yaml");
    fs::write(&config_path, format!("example_seed: {}\n", seed))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}
