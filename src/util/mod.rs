pub mod asset_mirror;
