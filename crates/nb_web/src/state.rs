use nb_inference::NewsSummarizer;
use nb_scrapers::ScraperManager;

/// Shared, read-only handles used by every request.
pub struct AppState {
    pub scraper: ScraperManager,
    pub summarizer: NewsSummarizer,
}
