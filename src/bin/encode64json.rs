use base64_json_sync::logger::setup_logger;
use base64_json_sync::{Json64Codec, StringCodec};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    setup_logger();

    if args.len() != 2 {
        log::error!("Usage: {} <json text>", args[0]);
        std::process::exit(1);
    }

    match Json64Codec::default().encode(&args[1]) {
        Ok(encoded) => println!("{encoded}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
