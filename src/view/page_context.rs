use serde::Deserialize;

use crate::post::Post;

/// A linked card on the site index: a project, a tool or a recent post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ramhorns::Content)]
pub struct CardDiv {
    pub link: String,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub additional_text: String,
}

#[derive(Debug, Clone, PartialEq, ramhorns::Content)]
pub struct StyleRef {
    pub href: String,
}

#[derive(ramhorns::Content)]
pub struct PostItem {
    pub link: String,
    pub file_name: String,
    pub title: String,
    pub date: String,
    pub tags: String,
    pub overview: String,
}

#[derive(ramhorns::Content)]
pub struct IndexPage {
    pub page_title: String,
    pub root_path: String,
    pub style_files: Vec<StyleRef>,
    pub projects: Vec<CardDiv>,
    pub tools: Vec<CardDiv>,
    pub posts: Vec<CardDiv>,
    pub project_cards: String,
    pub tool_cards: String,
    pub post_cards: String,
}

#[derive(ramhorns::Content)]
pub struct BlogIndexPage {
    pub page_title: String,
    pub root_path: String,
    pub style_files: Vec<StyleRef>,
    pub posts: Vec<PostItem>,
}

#[derive(ramhorns::Content)]
pub struct BlogPostPage {
    pub page_title: String,
    pub root_path: String,
    pub style_files: Vec<StyleRef>,
    pub date: String,
    pub tags: String,
    pub overview: String,
}

/// Links stylesheets relative to the page: `{root_path}/{style_folder}/{file}`.
pub fn style_refs(root_path: &str, style_folder: &str, files: &[String]) -> Vec<StyleRef> {
    files.iter()
        .map(|file| StyleRef {
            href: format!("{}/{}/{}", root_path, style_folder, file),
        })
        .collect()
}

/// Summary cards for the `count` first posts, linking into the blog folder.
pub fn recent_post_cards(posts: &[Post], blog_folder: &str, count: usize) -> Vec<CardDiv> {
    posts.iter()
        .take(count)
        .map(|post| CardDiv {
            link: format!("{}/{}", blog_folder, post.file_name),
            title: post.title.clone(),
            text: post.overview.clone(),
            additional_text: String::new(),
        })
        .collect()
}

impl From<&Post> for PostItem {
    fn from(post: &Post) -> Self {
        PostItem {
            link: post.file_name.clone(),
            file_name: post.file_name.clone(),
            title: post.title.clone(),
            date: post.date.clone(),
            tags: post.tags.clone(),
            overview: post.overview.clone(),
        }
    }
}
