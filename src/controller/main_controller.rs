use crate::common::*;

use crate::dto::exported_file::*;
use crate::dto::generation_outcome::*;
use crate::enums::chart_type::*;
use crate::model::chart::figure::*;
use crate::model::configs::app_config::*;
use crate::traits::service_traits::{
    chart_service::*, export_service::*, generation_service::*,
};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

#[derive(Debug, new)]
pub struct MainController<G: GenerationService, C: ChartService, E: ExportService> {
    generation_service: G,
    chart_service: C,
    export_service: E,
    config: AppConfig,
}

impl<G: GenerationService, C: ChartService, E: ExportService> MainController<G, C, E> {
    #[doc = r#"
        Interactive prompt loop. Each line is either a command
        (`exit`/`quit`, `list`, `clean`) or a chart request; a request may
        pin the chart type with a `bar:`/`line:`/`pie:`/`scatter:` prefix.

        Errors in one request are reported and never end the loop.
    "#]
    pub async fn run(&self) -> anyhow::Result<()> {
        self.run_with_reader(BufReader::new(tokio::io::stdin()))
            .await
    }

    async fn run_with_reader<R: AsyncBufRead + Unpin>(
        &self,
        mut reader: R,
    ) -> anyhow::Result<()> {
        println!("Chart Generator");
        println!("Describe the chart you want, or type 'exit' to quit.");
        println!("Prefix with bar:/line:/pie:/scatter: to pin the chart type.\n");

        loop {
            print!("chart> ");
            std::io::stdout().flush()?;

            let mut line: String = String::new();
            if reader.read_line(&mut line).await? == 0 {
                break;
            }

            let input: &str = line.trim();
            if input.is_empty() {
                continue;
            }

            match input.to_lowercase().as_str() {
                "exit" | "quit" => break,
                "list" => {
                    self.print_output_files().await;
                    continue;
                }
                "clean" => {
                    match self.export_service.clean_output_directory().await {
                        Ok(removed) => println!("Removed {} exported file(s).", removed),
                        Err(e) => error!("[MainController->run] clean failed: {:?}", e),
                    }
                    continue;
                }
                _ => {}
            }

            if let Err(e) = self.handle_prompt(input).await {
                error!("[MainController->run] {:?}", e);
                println!("Chart generation failed: {}", e);
            }
        }

        Ok(())
    }

    #[doc = r#"
        One full request: generate chart data, build the figure, export HTML.
        An export failure after a successful build is reported but does not
        fail the request; the figure itself was still produced.
    "#]
    pub async fn handle_prompt(&self, input: &str) -> anyhow::Result<Option<ExportedFile>> {
        let (user_prompt, chart_type_hint): (&str, Option<ChartType>) = split_type_prefix(input);

        let outcome: GenerationOutcome = self
            .generation_service
            .generate_chart_data(user_prompt, chart_type_hint)
            .await?;

        let figure: Figure = self
            .chart_service
            .build_figure(outcome.chart_data())
            .await?;

        println!(
            "Generated a {} chart '{}' with {} data point(s).",
            outcome
                .chart_data()
                .chart_type()
                .as_deref()
                .unwrap_or("unknown"),
            outcome.chart_data().title(),
            figure.data_points()
        );

        if *self.config.verbose() {
            if let Some(analysis) = outcome.analysis() {
                println!("\n{}\n", analysis);
            }
        }

        match self.export_service.export(&figure, &outcome).await {
            Ok(exported) => {
                println!("Saved to {}", exported.path().display());
                Ok(Some(exported))
            }
            Err(e) => {
                error!("[MainController->handle_prompt] export failed: {:?}", e);
                println!("Chart was generated but could not be saved: {}", e);
                Ok(None)
            }
        }
    }

    async fn print_output_files(&self) {
        match self.export_service.list_output_files().await {
            Ok(files) if files.is_empty() => println!("No exported files yet."),
            Ok(files) => {
                for file in files {
                    println!("{}", file.display());
                }
            }
            Err(e) => error!("[MainController->print_output_files] {:?}", e),
        }
    }
}

#[doc = "Split an explicit `bar:`/`line:`/`pie:`/`scatter:` prefix off the request."]
fn split_type_prefix(input: &str) -> (&str, Option<ChartType>) {
    if let Some((prefix, rest)) = input.split_once(':') {
        if let Some(chart_type) = ChartType::parse(prefix) {
            return (rest.trim(), Some(chart_type));
        }
    }

    (input, None)
}
