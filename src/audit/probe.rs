mod link_checker;
mod probe_results;
mod site_prober;
mod sitemap_parser;

pub use site_prober::SiteProber;
