use clap::{Parser, Subcommand};
use eyre::Context;
use oauth2::basic::BasicTokenResponse;
use serde::Serialize;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tokio_stream::StreamExt;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube3::oauth::{OAuthManager, Scope};
use youtube3::youtube_api::captions::CaptionFormat;
use youtube3::youtube_api::comments::TextFormat;
use youtube3::youtube_api::videos::{VideoSnippet, VideoStatus};
use youtube3::youtube_api::{PrivacyStatus, Rating, ResumableMedia, Video, YouTube};

/// Command-line access to a handful of YouTube Data API calls.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// API key used for calls that only read public data.
    #[arg(long, env = "YOUTUBE_API_KEY", global = true)]
    api_key: Option<String>,

    /// OAuth client id of the installed application.
    #[arg(long, env = "YOUTUBE_CLIENT_ID", global = true)]
    client_id: Option<String>,

    /// OAuth client secret of the installed application.
    #[arg(long, env = "YOUTUBE_CLIENT_SECRET", global = true)]
    client_secret: Option<String>,

    /// Where user tokens are stored between runs.
    #[arg(long, default_value = "tokens.json", global = true)]
    tokens: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Runs the browser sign-in flow and stores the resulting tokens.
    Login,
    /// Shows a video's details and statistics.
    Video { id: String },
    /// Searches for videos, channels, and playlists.
    Search {
        query: String,
        #[arg(long, default_value_t = 10)]
        max: usize,
    },
    /// Lists the channels owned by the signed-in user.
    MyChannels,
    /// Lists every item of a playlist.
    PlaylistItems { playlist_id: String },
    /// Lists the top-level comment threads of a video.
    Comments {
        video_id: String,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Rates a video as the signed-in user (`like`, `dislike`, or `none`).
    Rate { id: String, rating: Rating },
    /// Uploads a video file through a resumable session.
    Upload {
        file: PathBuf,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// `private`, `public`, or `unlisted`.
        #[arg(long, default_value = "private")]
        privacy: PrivacyStatus,
        #[arg(long, default_value = "video/*")]
        content_type: String,
    },
    /// Downloads a caption track to stdout.
    Caption {
        id: String,
        /// `sbv`, `scc`, `srt`, `ttml`, or `vtt`.
        #[arg(long)]
        format: Option<CaptionFormat>,
        /// Machine-translate the track into this language.
        #[arg(long)]
        lang: Option<String>,
    },
}

impl Command {
    fn needs_user(&self) -> bool {
        matches!(
            self,
            Self::Login
                | Self::MyChannels
                | Self::Rate { .. }
                | Self::Upload { .. }
                | Self::Caption { .. }
        )
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let yt = match (&args.api_key, args.command.needs_user()) {
        (Some(key), false) => YouTube::builder()
            .api_key(key)
            .build()
            .context("build api-key client")?,
        _ => user_client(&args).await?,
    };

    let result = run(&yt, args.command).await;

    // tokens may have been refreshed even if the call itself failed
    if let Some(token) = yt.token().await {
        let json = serde_json::to_string(&token).context("serialize tokens")?;
        tokio::fs::write(&args.tokens, json)
            .await
            .with_context(|| format!("write {}", args.tokens.display()))?;
    }

    result
}

async fn user_client(args: &Args) -> eyre::Result<YouTube> {
    let Some(client_id) = &args.client_id else {
        eyre::bail!("this command needs --client-id (or YOUTUBE_CLIENT_ID) to sign in");
    };
    let manager = OAuthManager::new(client_id.clone(), args.client_secret.clone()).with_scopes([
        Scope::Youtube,
        Scope::YoutubeForceSsl,
        Scope::YoutubeUpload,
    ]);

    let stored = if tokio::fs::try_exists(&args.tokens).await.unwrap_or(false) {
        let json = tokio::fs::read_to_string(&args.tokens)
            .await
            .with_context(|| format!("read {}", args.tokens.display()))?;
        match serde_json::from_str::<BasicTokenResponse>(&json) {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable token file");
                None
            }
        }
    } else {
        None
    };

    let token = manager
        .restore_or_authenticate(stored)
        .await
        .context("obtain user token")?;
    YouTube::builder()
        .oauth(token, manager)
        .build()
        .context("build oauth client")
}

async fn run(yt: &YouTube, command: Command) -> eyre::Result<()> {
    match command {
        Command::Login => {
            eprintln!("signed in");
        }
        Command::Video { id } => {
            let videos = yt
                .videos()
                .list("snippet,contentDetails,statistics")
                .id(&id)
                .send()
                .await
                .context("fetch video")?;
            match videos.items.into_iter().next() {
                Some(video) => print_json(&video)?,
                None => eyre::bail!("no video with id {id}"),
            }
        }
        Command::Search { query, max } => {
            let results = yt
                .search()
                .list("snippet")
                .q(&query)
                .max_results(page_size(max, 50))
                .stream()
                .take(max);
            print_stream(results).await?;
        }
        Command::MyChannels => {
            let channels = yt
                .channels()
                .list("snippet,contentDetails,statistics")
                .mine(true)
                .stream();
            print_stream(channels).await?;
        }
        Command::PlaylistItems { playlist_id } => {
            let items = yt
                .playlist_items()
                .list("snippet,contentDetails")
                .playlist_id(&playlist_id)
                .max_results(50)
                .stream();
            print_stream(items).await?;
        }
        Command::Comments { video_id, limit } => {
            let threads = yt
                .comment_threads()
                .list("snippet")
                .video_id(&video_id)
                .text_format(TextFormat::PlainText)
                .max_results(page_size(limit, 100))
                .stream()
                .take(limit);
            print_stream(threads).await?;
        }
        Command::Rate { id, rating } => {
            yt.videos()
                .rate(&id, rating)
                .send()
                .await
                .context("rate video")?;
            eprintln!("rated {id} as {rating}");
        }
        Command::Upload {
            file,
            title,
            description,
            privacy,
            content_type,
        } => {
            let media = ResumableMedia::from_file(&file, content_type)
                .await
                .with_context(|| format!("open {}", file.display()))?
                .on_progress(|sent, total| match total {
                    Some(total) => eprint!("\ruploaded {sent}/{total} bytes"),
                    None => eprint!("\ruploaded {sent} bytes"),
                });
            let video = Video {
                snippet: Some(VideoSnippet {
                    title: Some(title),
                    description,
                    ..Default::default()
                }),
                status: Some(VideoStatus {
                    privacy_status: Some(privacy),
                    ..Default::default()
                }),
                ..Default::default()
            };
            let uploaded = yt
                .videos()
                .insert("snippet,status", video)
                .resumable_media(media)
                .send()
                .await
                .context("upload video")?;
            eprintln!();
            print_json(&uploaded)?;
        }
        Command::Caption { id, format, lang } => {
            let mut call = yt.captions().download(&id);
            if let Some(format) = format {
                call = call.tfmt(format);
            }
            if let Some(lang) = lang {
                call = call.tlang(&lang);
            }
            let track = call.download().await.context("download caption")?;
            std::io::stdout()
                .write_all(&track)
                .context("write caption to stdout")?;
        }
    }
    Ok(())
}

async fn print_stream<T, S>(stream: S) -> eyre::Result<()>
where
    T: Serialize,
    S: tokio_stream::Stream<Item = youtube3::youtube_api::Result<T>>,
{
    let mut stream = std::pin::pin!(stream);
    while let Some(item) = stream.next().await {
        let item = item.context("fetch page")?;
        print_json(&item)?;
    }
    Ok(())
}

/// The `maxResults` to request when at most `wanted` items will be read, given the
/// method's upper bound `cap`. The API rejects zero.
fn page_size(wanted: usize, cap: u32) -> u32 {
    u32::try_from(wanted).unwrap_or(cap).clamp(1, cap)
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize response")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_stays_in_range() {
        assert_eq!(page_size(0, 100), 1);
        assert_eq!(page_size(20, 100), 20);
        assert_eq!(page_size(500, 100), 100);
        assert_eq!(page_size(usize::MAX, 50), 50);
    }

    #[test]
    fn parses_enum_arguments() {
        let args = Args::try_parse_from(["youtube3-cli", "rate", "dQw4w9WgXcQ", "like"]).unwrap();
        assert!(matches!(args.command, Command::Rate { rating: Rating::Like, .. }));
        assert!(Args::try_parse_from(["youtube3-cli", "rate", "dQw4w9WgXcQ", "love"]).is_err());
    }
}
