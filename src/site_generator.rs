use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use spdlog::{debug, info};

use crate::config::Config;
use crate::content::content_file::ContentFile;
use crate::content::marker_extractor::MarkerExtractor;
use crate::post::Post;
use crate::post_catalog::PostCatalog;
use crate::util::asset_mirror::mirror_dir;
use crate::view::page_composer::{load_fragment, parse_fragment, PageComposer};
use crate::view::page_context::{recent_post_cards, style_refs, BlogIndexPage, BlogPostPage, IndexPage, PostItem};

const SITE_ROOT: &str = ".";
const BLOG_ROOT: &str = "..";

/// Runs one full build of the site described by `config`.
pub struct SiteGenerator<'a> {
    config: &'a Config,
}

impl<'a> SiteGenerator<'a> {
    pub fn new(config: &'a Config) -> SiteGenerator<'a> {
        SiteGenerator { config }
    }

    /// Rebuilds the output directory from scratch. The first error stops the build.
    pub fn run(&self) -> Result<Vec<Post>> {
        self.clean_output()?;
        self.mirror_assets()?;

        let blog_dir = self.config.output_blog_dir();
        fs::create_dir_all(&blog_dir)
            .with_context(|| format!("Error creating {}", blog_dir.display()))?;

        let composer = PageComposer::from_dir(&self.config.paths.component_dir)?;
        let posts = self.generate_blog_pages(&composer)?;
        self.generate_blog_index_page(&composer, &posts)?;
        self.generate_index_page(&composer, &posts)?;

        info!("Site generated in {}", self.config.paths.output_dir.display());
        Ok(posts)
    }

    fn clean_output(&self) -> Result<()> {
        let output_dir = &self.config.paths.output_dir;
        if output_dir.exists() {
            info!("Removing previous output {}", output_dir.display());
            fs::remove_dir_all(output_dir)
                .with_context(|| format!("Error removing {}", output_dir.display()))?;
        }
        Ok(())
    }

    fn mirror_assets(&self) -> Result<()> {
        let paths = &self.config.paths;
        let count = mirror_dir(&paths.static_dir, &paths.output_dir)
            .with_context(|| format!("Error copying static files from {}", paths.static_dir.display()))?;
        info!("Copied {} static files", count);

        if paths.style_dir.is_dir() {
            let style_out = paths.output_dir.join(&self.config.defaults.style_folder_name);
            let count = mirror_dir(&paths.style_dir, &style_out)
                .with_context(|| format!("Error copying styles from {}", paths.style_dir.display()))?;
            info!("Copied {} style files", count);
        } else {
            debug!("No style directory at {}", paths.style_dir.display());
        }
        Ok(())
    }

    fn generate_blog_pages(&self, composer: &PageComposer) -> Result<Vec<Post>> {
        let defaults = &self.config.defaults;
        let extractor = MarkerExtractor::new(defaults.overview_length);
        let catalog = PostCatalog::new(self.config.paths.blog_dir.clone(), &defaults.index_file_name, &extractor);
        let out_dir = self.config.output_blog_dir();

        catalog.build(|post, content_file| self.generate_post_page(composer, post, content_file, &out_dir))
    }

    fn generate_post_page(&self, composer: &PageComposer, post: &Post, content_file: &ContentFile, out_dir: &Path) -> Result<()> {
        let body = parse_fragment(&content_file.file_name, content_file.raw_content.clone())?;
        let context = BlogPostPage {
            page_title: post.title.clone(),
            root_path: BLOG_ROOT.to_string(),
            style_files: style_refs(BLOG_ROOT, &self.config.defaults.style_folder_name, &self.config.styles.blog_post),
            date: post.date.clone(),
            tags: post.tags.clone(),
            overview: post.overview.clone(),
        };

        composer.write_page(&context, &body, &out_dir.join(&post.file_name))?;
        Ok(())
    }

    fn generate_blog_index_page(&self, composer: &PageComposer, posts: &[Post]) -> Result<()> {
        let defaults = &self.config.defaults;
        let body = load_fragment(&self.config.paths.blog_dir.join(&defaults.index_file_name))?;
        let context = BlogIndexPage {
            page_title: "Blog".to_string(),
            root_path: BLOG_ROOT.to_string(),
            style_files: style_refs(BLOG_ROOT, &defaults.style_folder_name, &self.config.styles.blog_index),
            posts: posts.iter().map(PostItem::from).collect(),
        };

        let dest = self.config.output_blog_dir().join(&defaults.index_file_name);
        composer.write_page(&context, &body, &dest)?;
        info!("Generated blog index with {} posts", posts.len());
        Ok(())
    }

    fn generate_index_page(&self, composer: &PageComposer, posts: &[Post]) -> Result<()> {
        let defaults = &self.config.defaults;
        let body = load_fragment(&self.config.paths.page_dir.join(&defaults.index_file_name))?;
        let recent = recent_post_cards(posts, &defaults.blog_folder_name, defaults.recent_post_count);

        let context = IndexPage {
            page_title: "Home".to_string(),
            root_path: SITE_ROOT.to_string(),
            style_files: style_refs(SITE_ROOT, &defaults.style_folder_name, &self.config.styles.index),
            project_cards: composer.render_cards(&self.config.projects),
            tool_cards: composer.render_cards(&self.config.tools),
            post_cards: composer.render_cards(&recent),
            projects: self.config.projects.clone(),
            tools: self.config.tools.clone(),
            posts: recent,
        };

        let dest = self.config.paths.output_dir.join(&defaults.index_file_name);
        composer.write_page(&context, &body, &dest)?;
        info!("Generated site index with {} recent posts", context.posts.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use tempfile::TempDir;
    use walkdir::WalkDir;

    use crate::content::metadata_extractor::ExtractError;
    use crate::test_data::{make_post, write_test_site};
    use crate::view::page_context::CardDiv;

    use super::*;

    fn three_posts() -> Vec<(&'static str, String)> {
        vec![
            ("Wireframe Viewer.html", make_post("Wireframe Viewer", "Jan. 2, 2024, Tuesday", "Drawing .OBJ models")),
            ("Syntax Highlighter.html", make_post("Syntax Highlighter", "Mar. 5, 2023, Sunday", "Highlighting keywords")),
            ("Year End.html", make_post("Year End", "Dec. 31, 2024, Tuesday", "Looking back")),
        ]
    }

    fn config_for(tmp: &TempDir) -> Config {
        let mut config = Config::with_root(tmp.path());
        config.projects = vec![CardDiv {
            link: "https://github.com/Hackerry/Simulators".to_string(),
            title: "Graph Search Algo Simulator".to_string(),
            text: "Visualize graph search algorithms".to_string(),
            additional_text: "Read More...".to_string(),
        }];
        config
    }

    fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        WalkDir::new(dir).into_iter()
            .map(|e| e.unwrap())
            .filter(|e| e.file_type().is_file())
            .map(|e| (e.path().strip_prefix(dir).unwrap().to_path_buf(), fs::read(e.path()).unwrap()))
            .collect()
    }

    #[test]
    fn test_generate_site() {
        let tmp = TempDir::new().unwrap();
        write_test_site(tmp.path(), &three_posts());
        let config = config_for(&tmp);

        let posts = SiteGenerator::new(&config).run().unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Year End", "Wireframe Viewer", "Syntax Highlighter"]);

        let output = tmp.path().join("output");
        let files: Vec<PathBuf> = snapshot(&output).into_keys().collect();
        assert_eq!(files, [
            PathBuf::from("blog").join("Syntax Highlighter.html"),
            PathBuf::from("blog").join("Wireframe Viewer.html"),
            PathBuf::from("blog").join("Year End.html"),
            PathBuf::from("blog").join("index.html"),
            PathBuf::from("favicon.ico"),
            PathBuf::from("img").join("logo.svg"),
            PathBuf::from("index.html"),
            PathBuf::from("styles").join("toplevel.css"),
        ]);

        let post_page = fs::read_to_string(output.join("blog").join("Year End.html")).unwrap();
        assert!(post_page.starts_with("<html><head>\n<title>Year End</title>\n"));
        assert!(post_page.contains("<link rel=\"stylesheet\" href=\"../styles/post.css\">"));
        assert!(post_page.contains("<!-- Copied body -->\n<!--Looking back-->"));
        assert!(post_page.ends_with("<footer>Made by hand</footer></body></html>"));

        let blog_index = fs::read_to_string(output.join("blog").join("index.html")).unwrap();
        let year_end = blog_index.find("<a href=\"Year End.html\">Year End</a>").unwrap();
        let wireframe = blog_index.find("<a href=\"Wireframe Viewer.html\">Wireframe Viewer</a>").unwrap();
        let highlighter = blog_index.find("<a href=\"Syntax Highlighter.html\">Syntax Highlighter</a>").unwrap();
        assert!(year_end < wireframe && wireframe < highlighter);
        assert!(blog_index.contains("<span>Dec. 31, 2024</span> <em>notes</em><p>Looking back...</p>"));
        assert!(blog_index.contains("href=\"../styles/blogIndex.css\""));

        let index = fs::read_to_string(output.join("index.html")).unwrap();
        assert_eq!(index.matches("href=\"blog/").count(), 3);
        assert!(index.contains("<a class=\"card\" href=\"blog/Year End.html\"><h3>Year End</h3><p>Looking back...</p><span></span></a>"));
        assert!(index.contains("<h3>Graph Search Algo Simulator</h3>"));
        assert!(index.contains("<div id=\"tools\"></div>"));
        assert!(index.contains("<link rel=\"stylesheet\" href=\"./styles/cardDiv.css\">"));
        assert!(index.contains("<a href=\"./blog/index.html\">Blog</a>"));
    }

    #[test]
    fn test_index_shows_five_most_recent() {
        let tmp = TempDir::new().unwrap();
        let posts: Vec<(String, String)> = (1..=7)
            .map(|day| (format!("day{}.html", day), make_post(&format!("Day {}", day), &format!("Jul. {}, 2022, Someday", day), "Daily")))
            .collect();
        let posts: Vec<(&str, String)> = posts.iter().map(|(n, c)| (n.as_str(), c.clone())).collect();
        write_test_site(tmp.path(), &posts);
        let config = config_for(&tmp);

        SiteGenerator::new(&config).run().unwrap();

        let index = fs::read_to_string(tmp.path().join("output").join("index.html")).unwrap();
        assert_eq!(index.matches("href=\"blog/").count(), 5);
        assert!(index.contains("<h3>Day 7</h3>"));
        assert!(index.contains("<h3>Day 3</h3>"));
        assert!(!index.contains("<h3>Day 2</h3>"));
    }

    #[test]
    fn test_generate_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        write_test_site(tmp.path(), &three_posts());
        let config = config_for(&tmp);
        let output = tmp.path().join("output");

        SiteGenerator::new(&config).run().unwrap();
        let first = snapshot(&output);
        SiteGenerator::new(&config).run().unwrap();
        let second = snapshot(&output);

        assert_eq!(first, second);
    }

    #[test]
    fn test_stale_output_is_removed() {
        let tmp = TempDir::new().unwrap();
        write_test_site(tmp.path(), &three_posts());
        let config = config_for(&tmp);
        let stale = tmp.path().join("output").join("blog").join("Deleted Post.html");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        SiteGenerator::new(&config).run().unwrap();

        assert!(!stale.exists());
        assert!(tmp.path().join("output").join("blog").join("Year End.html").exists());
    }

    #[test]
    fn test_invalid_post_aborts_run() {
        let tmp = TempDir::new().unwrap();
        let mut posts = three_posts();
        posts.push(("No Tags.html", "<!--overview only-->\n<h1>No Tags</h1>\n<p id='content-date'>Jan. 1, 2024, Monday</p>\n<div id='content-wrapper'></div>".to_string()));
        write_test_site(tmp.path(), &posts);
        let config = config_for(&tmp);

        let err = SiteGenerator::new(&config).run().unwrap_err();
        assert_eq!(err.downcast_ref::<ExtractError>(), Some(&ExtractError::TagNotFound("No Tags.html".to_string())));
        assert!(!tmp.path().join("output").join("index.html").exists());
    }

    #[test]
    fn test_missing_component_aborts_run() {
        let tmp = TempDir::new().unwrap();
        write_test_site(tmp.path(), &three_posts());
        fs::remove_file(tmp.path().join("components").join("footer.html")).unwrap();
        let config = config_for(&tmp);

        let err = SiteGenerator::new(&config).run().unwrap_err();
        assert!(err.to_string().starts_with("Error loading template"));
    }
}
