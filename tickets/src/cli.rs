//! Command-line surface.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{debug, info, warn};

use crate::domain::{CategoryFilter, DateError, TrainCategory, TravelDate};
use crate::query::{MockTicketClient, QueryConfig, QueryError, TicketClient, TicketQuery};
use crate::render::Table;
use crate::runner::{RunError, run_query};
use crate::stations::{StationClient, StationClientConfig, StationDirectory, StationError};

/// Query 12306 for trains with tickets left between two stations.
#[derive(Parser, Debug, Clone)]
#[command(name = "tickets", version)]
pub struct Args {
    /// Departure station (Chinese name or pinyin)
    pub from: String,

    /// Arrival station (Chinese name or pinyin)
    pub to: String,

    /// Travel date, YYYY-MM-DD
    pub date: String,

    /// 动车 (D trains)
    #[arg(short = 'd')]
    pub emu: bool,

    /// 高铁 (G trains)
    #[arg(short = 'g')]
    pub high_speed: bool,

    /// 快速 (K trains)
    #[arg(short = 'k')]
    pub fast: bool,

    /// 特快 (T trains)
    #[arg(short = 't')]
    pub express: bool,

    /// 直达 (Z trains)
    #[arg(short = 'z')]
    pub direct_express: bool,

    /// Read the station list from a station_name.js file
    #[arg(long, value_name = "FILE")]
    pub stations: Option<PathBuf>,

    /// Download the current station list from 12306
    #[arg(long, conflicts_with = "stations")]
    pub fetch_stations: bool,

    /// Where the station list is downloaded from
    #[arg(long, env = "TICKETS_STATIONS_URL", value_name = "URL")]
    pub stations_url: Option<String>,

    /// Read the query response from a saved JSON file instead of 12306
    #[arg(long, value_name = "FILE")]
    pub mock: Option<PathBuf>,

    /// Left-ticket query endpoint
    #[arg(long, env = "TICKETS_BASE_URL")]
    pub base_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, env = "TICKETS_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Do not verify TLS certificates
    #[arg(long)]
    pub insecure: bool,
}

impl Args {
    /// Categories selected by the single-letter flags.
    pub fn categories(&self) -> Vec<TrainCategory> {
        TrainCategory::ALL
            .into_iter()
            .filter(|category| match category {
                TrainCategory::Emu => self.emu,
                TrainCategory::HighSpeed => self.high_speed,
                TrainCategory::Fast => self.fast,
                TrainCategory::Express => self.express,
                TrainCategory::DirectExpress => self.direct_express,
            })
            .collect()
    }

    /// The category filter; empty when no flag was given.
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_categories(self.categories())
    }

    pub fn query_config(&self) -> QueryConfig {
        let config = QueryConfig::new()
            .with_timeout(self.timeout)
            .with_accept_invalid_certs(self.insecure);
        match &self.base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }

    pub fn station_client_config(&self) -> StationClientConfig {
        let config = StationClientConfig::new()
            .with_timeout(self.timeout)
            .with_accept_invalid_certs(self.insecure);
        match &self.stations_url {
            Some(url) => config.with_url(url),
            None => config,
        }
    }
}

/// Everything that can end a run, with the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A station name has no telecode
    #[error("请输入有效的车站名称")]
    InvalidStation(#[source] StationError),

    /// The date is malformed or in the past
    #[error("请输入有效日期")]
    InvalidDate(#[source] DateError),

    /// The station list could not be loaded
    #[error("failed to load station list: {0}")]
    Stations(#[source] StationError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Run(#[from] RunError),
}

/// Load the station directory the arguments ask for.
pub async fn load_stations(args: &Args) -> Result<StationDirectory, AppError> {
    let directory = if let Some(path) = &args.stations {
        StationDirectory::from_file(path)
    } else if args.fetch_stations {
        fetch_stations(args).await
    } else {
        StationDirectory::bundled()
    };

    directory.map_err(AppError::Stations)
}

async fn fetch_stations(args: &Args) -> Result<StationDirectory, StationError> {
    StationClient::new(args.station_client_config())?.fetch().await
}

/// Resolve the query, downloading the current station list when a name is
/// missing from the bundled one.
///
/// The download is only attempted when no station source was chosen on the
/// command line. If it fails, the original lookup error is returned.
async fn resolve_with_refresh(
    args: &Args,
    directory: StationDirectory,
    today: NaiveDate,
) -> Result<(StationDirectory, TicketQuery), AppError> {
    let lookup_error = match resolve_query(args, &directory, today) {
        Ok(query) => return Ok((directory, query)),
        Err(AppError::InvalidStation(e)) if args.stations.is_none() && !args.fetch_stations => e,
        Err(e) => return Err(e),
    };

    info!(error = %lookup_error, "station not in bundled list, downloading current list");
    let fresh = match fetch_stations(args).await {
        Ok(fresh) => fresh,
        Err(e) => {
            warn!(error = %e, "station list download failed");
            return Err(AppError::InvalidStation(lookup_error));
        }
    };

    let query = resolve_query(args, &fresh, today)?;
    Ok((fresh, query))
}

/// Validate the stations and date into a query.
///
/// Stations are checked before the date.
pub fn resolve_query(
    args: &Args,
    directory: &StationDirectory,
    today: NaiveDate,
) -> Result<TicketQuery, AppError> {
    let from = directory
        .telecode(&args.from)
        .map_err(AppError::InvalidStation)?;
    let to = directory
        .telecode(&args.to)
        .map_err(AppError::InvalidStation)?;
    let date = TravelDate::parse(&args.date, today).map_err(AppError::InvalidDate)?;

    debug!(%from, %to, %date, "resolved query");
    Ok(TicketQuery { date, from, to })
}

/// Run the whole command and return the table to print.
pub async fn run(args: &Args, today: NaiveDate) -> Result<Table, AppError> {
    let directory = load_stations(args).await?;
    let (directory, query) = resolve_with_refresh(args, directory, today).await?;
    let filter = args.filter();

    let table = match &args.mock {
        Some(path) => {
            let source = MockTicketClient::new(path)?;
            run_query(&source, &directory, &query, &filter).await?
        }
        None => {
            let client = TicketClient::new(args.query_config())?;
            run_query(&client, &directory, &query, &filter).await?
        }
    };

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Telecode;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tickets").chain(argv.iter().copied())).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn positional_arguments() {
        let args = parse(&["北京", "上海", "2024-03-15"]);
        assert_eq!(args.from, "北京");
        assert_eq!(args.to, "上海");
        assert_eq!(args.date, "2024-03-15");
        assert!(args.filter().is_empty());
    }

    #[test]
    fn category_flags() {
        let args = parse(&["-gd", "北京", "上海", "2024-03-15"]);
        assert_eq!(
            args.categories(),
            [TrainCategory::Emu, TrainCategory::HighSpeed]
        );
        assert_eq!(args.filter(), CategoryFilter::from_codes(['g', 'd']));
    }

    #[test]
    fn all_category_flags() {
        let args = parse(&["-d", "-g", "-k", "-t", "-z", "北京", "上海", "2024-03-15"]);
        assert_eq!(args.categories().len(), 5);
    }

    #[test]
    fn missing_date_is_a_usage_error() {
        assert!(Args::try_parse_from(["tickets", "北京", "上海"]).is_err());
    }

    #[test]
    fn stations_and_fetch_conflict() {
        let result = Args::try_parse_from([
            "tickets",
            "--stations",
            "s.js",
            "--fetch-stations",
            "北京",
            "上海",
            "2024-03-15",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn query_config_from_flags() {
        let args = parse(&[
            "--base-url",
            "http://localhost:9000/q",
            "--timeout",
            "3",
            "--insecure",
            "北京",
            "上海",
            "2024-03-15",
        ]);
        let config = args.query_config();
        assert_eq!(config.base_url, "http://localhost:9000/q");
        assert_eq!(config.timeout_secs, 3);
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn stations_url_from_flag() {
        let args = parse(&[
            "--stations-url",
            "http://localhost:9000/station_name.js",
            "北京",
            "上海",
            "2024-03-15",
        ]);
        assert_eq!(
            args.station_client_config().url,
            "http://localhost:9000/station_name.js"
        );
        assert_ne!(
            parse(&["北京", "上海", "2024-03-15"]).station_client_config().url,
            args.station_client_config().url
        );
    }

    #[tokio::test]
    async fn failed_refresh_keeps_lookup_error() {
        let args = parse(&[
            "--stations-url",
            "http://127.0.0.1:9/station_name.js",
            "--timeout",
            "2",
            "火星",
            "上海",
            "2024-03-15",
        ]);
        let directory = StationDirectory::bundled().unwrap();

        let err = resolve_with_refresh(&args, directory, today())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidStation(StationError::UnknownName(_))));
    }

    #[tokio::test]
    async fn explicit_station_file_is_not_refreshed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, "@bji|北京|BJP|beijing|bj|0".as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let args = parse(&[
            "--stations",
            &path,
            "--stations-url",
            "http://127.0.0.1:9/station_name.js",
            "北京",
            "上海",
            "2024-03-15",
        ]);
        let directory = load_stations(&args).await.unwrap();

        let err = resolve_with_refresh(&args, directory, today())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidStation(_)));
    }

    #[test]
    fn resolves_valid_query() {
        let args = parse(&["北京", "shanghaihongqiao", "2024-03-15"]);
        let directory = StationDirectory::bundled().unwrap();

        let query = resolve_query(&args, &directory, today()).unwrap();
        assert_eq!(query.from, Telecode::parse("BJP").unwrap());
        assert_eq!(query.to, Telecode::parse("AOH").unwrap());
        assert_eq!(query.date.as_query_value(), "2024-03-15");
    }

    #[test]
    fn unknown_station_message() {
        let args = parse(&["火星", "上海", "2024-03-15"]);
        let directory = StationDirectory::bundled().unwrap();

        let err = resolve_query(&args, &directory, today()).unwrap_err();
        assert!(matches!(err, AppError::InvalidStation(_)));
        assert_eq!(err.to_string(), "请输入有效的车站名称");
    }

    #[test]
    fn past_date_message() {
        let args = parse(&["北京", "上海", "2024-02-29"]);
        let directory = StationDirectory::bundled().unwrap();

        let err = resolve_query(&args, &directory, today()).unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(DateError::InPast { .. })));
        assert_eq!(err.to_string(), "请输入有效日期");
    }

    #[test]
    fn station_checked_before_date() {
        let args = parse(&["火星", "上海", "not-a-date"]);
        let directory = StationDirectory::bundled().unwrap();

        let err = resolve_query(&args, &directory, today()).unwrap_err();
        assert!(matches!(err, AppError::InvalidStation(_)));
    }
}
