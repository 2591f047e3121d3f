use std::path::Path;
use std::process::ExitCode;

use msav::{decode, SpriteLookup, UnknownTilePolicy};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let Some(save_path) = args.get(1) else {
        eprintln!("usage: msav-preview <save.msav> [sprite-root] [out.png]");
        return ExitCode::from(2);
    };
    let sprite_root = args
        .get(2)
        .map(|s| s.as_str())
        .unwrap_or("Mindustry/core/assets-raw/sprites");
    let out_path = args.get(3).cloned().unwrap_or_else(|| {
        format!("{}-map.png", Path::new(save_path).with_extension("").display())
    });

    let mut sprites = SpriteLookup::new(sprite_root);
    let preview = match decode(save_path, &mut sprites, UnknownTilePolicy::Placeholder) {
        Ok(preview) => preview,
        Err(e) => {
            eprintln!("{save_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = preview.image.save(&out_path) {
        eprintln!("{out_path}: {e}");
        return ExitCode::FAILURE;
    }
    eprintln!(
        "{} ({}x{} tiles) -> {}",
        preview.name, preview.width, preview.height, out_path
    );
    ExitCode::SUCCESS
}
