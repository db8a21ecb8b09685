use clap::Parser;
use costview::{cli, config, error, pipeline, render, viewer};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use pipeline::Verbosity;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let log = Verbosity::from_flag(cli.verbose);

    match cli.command {
        Commands::Show { input, save } => {
            println!("🗺  costview - コスト行列表示\n");
            let config = input.apply(config)?;
            let rendered = pipeline::render_cost_matrix(&config, log)?;
            println!("{}\n", rendered.summary);

            if let Some(path) = save {
                render::save_png(&rendered.image, &path)?;
                println!("✔ 画像を保存: {}", path.display());
            }

            println!("- ウィンドウを表示中（任意のキーで終了）...");
            viewer::show(&rendered.image, &config.window_title)?;
        }

        Commands::Render { input, output } => {
            println!("🗺  costview - 画像出力\n");
            let config = input.apply(config)?;
            let rendered = pipeline::render_cost_matrix(&config, log)?;
            println!("{}\n", rendered.summary);

            render::save_png(&rendered.image, &output)?;
            println!("✔ 画像を保存: {}", output.display());
        }

        Commands::Stats { input, json } => {
            let config = input.apply(config)?;
            let log = if json { Verbosity::Quiet } else { log };
            let inputs = pipeline::load_inputs(&config, log)?;
            let summary = inputs.summary(inputs.highlights.len());

            if json {
                println!("{}", summary.to_json()?);
            } else {
                println!("統計:");
                println!("{summary}");
            }
        }

        Commands::Config(args) => {
            let mut config = config;

            if let Some(folder) = args.set_folder.clone() {
                config.set_folder(folder)?;
                println!("✔ フォルダを設定しました");
            }

            if let Some(traj_size) = args.set_traj_size {
                config.set_traj_size(traj_size)?;
                println!("✔ 行列サイズを設定しました");
            }

            if args.should_show() {
                println!("設定:");
                println!("  フォルダ: {}", config.folder.display());
                println!("  行列サイズ: {}", config.traj_size);
                println!("  scores: {}", config.scores_path().display());
                println!("  simPlaces: {}", config.sim_places_path().display());
                println!("  ハイライト色: {:?}", config.highlight_color);
                println!("  ウィンドウ名: {}", config.window_title);
            }
        }
    }

    Ok(())
}
