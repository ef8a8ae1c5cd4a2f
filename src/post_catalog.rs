use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use spdlog::{debug, info};

use crate::content::content_file::ContentFile;
use crate::content::metadata_extractor::MetadataExtractor;
use crate::post::{sort_by_date, Post};
use crate::post_list::PostList;

/// Collects every post of the blog directory, newest first.
pub struct PostCatalog<'a> {
    post_list: PostList,
    extractor: &'a dyn MetadataExtractor,
}

impl<'a> PostCatalog<'a> {
    pub fn new(blog_dir: PathBuf, index_file: &str, extractor: &'a dyn MetadataExtractor) -> PostCatalog<'a> {
        PostCatalog {
            post_list: PostList {
                root_dir: blog_dir,
                index_file: index_file.to_string(),
            },
            extractor,
        }
    }

    /// `on_post` runs right after each post is extracted, in directory order.
    /// Pages are keyed by base name, so two posts sharing one abort the build.
    pub fn build<F>(&self, mut on_post: F) -> Result<Vec<Post>>
        where F: FnMut(&Post, &ContentFile) -> Result<()>
    {
        let root_dir = &self.post_list.root_dir;
        let files = self.post_list.retrieve_files()
            .with_context(|| format!("Error listing posts in {}", root_dir.display()))?;

        let mut posts = Vec::with_capacity(files.len());
        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        for file_path in files {
            let content_file = ContentFile::from_file(file_path)?;
            if let Some(first) = seen.get(&content_file.file_name) {
                bail!("Duplicate post name {}: {} and {}",
                    content_file.file_name, first.display(), content_file.file_path.display());
            }
            seen.insert(content_file.file_name.clone(), content_file.file_path.clone());

            let post = self.extractor.extract(&content_file)?;
            debug!("Found post {}", post);

            on_post(&post, &content_file)
                .with_context(|| format!("Error generating page for {}", content_file.file_name))?;
            posts.push(post);
        }

        let posts = sort_by_date(posts)?;
        info!("Found {} posts in {}", posts.len(), root_dir.display());
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::content::marker_extractor::MarkerExtractor;
    use crate::content::metadata_extractor::ExtractError;
    use crate::test_data::make_post;

    use super::*;

    fn write_blog(tmp: &TempDir, posts: &[(&str, String)]) -> PathBuf {
        let blog = tmp.path().join("blog");
        fs::create_dir_all(blog.join("series")).unwrap();
        fs::write(blog.join("index.html"), "<ul>{{#posts}}{{/posts}}</ul>").unwrap();
        for (name, content) in posts {
            fs::write(blog.join(name), content).unwrap();
        }
        blog
    }

    #[test]
    fn test_build_sorted_catalog() {
        let tmp = TempDir::new().unwrap();
        let blog = write_blog(&tmp, &[
            ("a.html", make_post("Post A", "Jan. 2, 2024, Tuesday", "First")),
            ("b.html", make_post("Post B", "Mar. 5, 2023, Sunday", "Second")),
            ("series/c.html", make_post("Post C", "Dec. 31, 2024, Tuesday", "Third")),
        ]);

        let extractor = MarkerExtractor::default();
        let catalog = PostCatalog::new(blog, "index.html", &extractor);
        let mut seen = vec![];
        let posts = catalog.build(|post, content_file| {
            seen.push(post.file_name.clone());
            assert!(content_file.raw_content.contains(&post.title));
            Ok(())
        }).unwrap();

        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Post C", "Post A", "Post B"]);
        assert_eq!(posts[0].file_name, "c.html");
        assert_eq!(posts[0].overview, "Third...");

        seen.sort();
        assert_eq!(seen, ["a.html", "b.html", "c.html"]);
    }

    #[test]
    fn test_extraction_failure_aborts() {
        let tmp = TempDir::new().unwrap();
        let blog = write_blog(&tmp, &[
            ("a.html", make_post("Post A", "Jan. 2, 2024, Tuesday", "First")),
            ("broken.html", "<!--overview-->\n<!--tags-->\n<div id='content-wrapper'></div>".to_string()),
        ]);

        let extractor = MarkerExtractor::default();
        let catalog = PostCatalog::new(blog, "index.html", &extractor);
        let err = catalog.build(|_, _| Ok(())).unwrap_err();
        assert_eq!(err.downcast_ref::<ExtractError>(), Some(&ExtractError::TitleNotFound("broken.html".to_string())));
    }

    #[test]
    fn test_invalid_date_aborts() {
        let tmp = TempDir::new().unwrap();
        let blog = write_blog(&tmp, &[
            ("a.html", make_post("Post A", "2024-01-02, Tuesday", "First")),
        ]);

        let extractor = MarkerExtractor::default();
        let catalog = PostCatalog::new(blog, "index.html", &extractor);
        let err = catalog.build(|_, _| Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "Unable to parse date '2024-01-02' - file=a.html");
    }

    #[test]
    fn test_duplicate_base_name_aborts() {
        let tmp = TempDir::new().unwrap();
        let blog = write_blog(&tmp, &[
            ("a.html", make_post("Post A", "Jan. 2, 2024, Tuesday", "First")),
            ("series/a.html", make_post("Post A2", "Mar. 5, 2023, Sunday", "Second")),
        ]);

        let extractor = MarkerExtractor::default();
        let catalog = PostCatalog::new(blog.clone(), "index.html", &extractor);
        let mut pages = 0;
        let err = catalog.build(|_, _| { pages += 1; Ok(()) }).unwrap_err();

        let msg = err.to_string();
        assert!(msg.starts_with("Duplicate post name a.html"));
        assert!(msg.contains(&blog.join("a.html").display().to_string()));
        assert!(msg.contains(&blog.join("series").join("a.html").display().to_string()));
        assert_eq!(pages, 1);
    }

    #[test]
    fn test_page_failure_aborts() {
        let tmp = TempDir::new().unwrap();
        let blog = write_blog(&tmp, &[
            ("a.html", make_post("Post A", "Jan. 2, 2024, Tuesday", "First")),
        ]);

        let extractor = MarkerExtractor::default();
        let catalog = PostCatalog::new(blog, "index.html", &extractor);
        let err = catalog.build(|_, _| anyhow::bail!("disk full")).unwrap_err();
        assert_eq!(err.to_string(), "Error generating page for a.html");
    }
}
