use clap::Subcommand;
use serde_json::json;

use crate::cli::{
    utils::{output_error, output_success},
    OutputFormat,
};
use crate::image::{image_key, ImageManager, ProxyDeleteClient, ToastVariant, Toaster};

#[derive(Subcommand)]
pub enum ImageCommands {
    #[command(about = "Print the storage key for an image URL")]
    Key {
        #[arg(help = "Image URL")]
        url: String,
    },

    #[command(about = "Delete an uploaded image through a running server")]
    Delete {
        #[arg(help = "Image URL")]
        url: String,
        #[arg(long, default_value = "http://127.0.0.1:3000", help = "Server base URL")]
        server: String,
        #[arg(long, env = "HOTEL_TOKEN", help = "Bearer token of the image owner")]
        token: Option<String>,
    },
}

pub async fn handle(cmd: ImageCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ImageCommands::Key { url } => output_success(
            &output_format,
            image_key(&url),
            Some(json!({ "url": url, "key": image_key(&url) })),
        ),
        ImageCommands::Delete { url, server, token } => {
            let client = ProxyDeleteClient::new(&server, token)?;
            let (toaster, mut toasts) = Toaster::channel();
            let mut manager = ImageManager::new(Some(url), toaster);

            let outcome = manager.delete(&client).await;

            while let Ok(toast) = toasts.try_recv() {
                match toast.variant {
                    ToastVariant::Success => output_success(&output_format, &toast.description, None)?,
                    ToastVariant::Destructive => output_error(&output_format, &toast.description, None)?,
                }
            }

            outcome.map(|_| ()).map_err(Into::into)
        }
    }
}
