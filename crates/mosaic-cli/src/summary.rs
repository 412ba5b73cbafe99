use console::Style;
use mosaic_core::config::ComposeConfig;
use mosaic_core::layout::GridLayout;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_compose_summary(config: &ComposeConfig, layout: &GridLayout) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Mosaic"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(6)));
    println!();

    println!(
        "  {:<10}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(layout.count)
    );
    for (i, input) in config.inputs.iter().enumerate() {
        println!(
            "    {}. {}",
            s.label.apply_to(i + 1),
            s.path.apply_to(input.display())
        );
    }
    println!(
        "  {:<10}{}",
        s.label.apply_to("Grid"),
        s.value.apply_to(format!("{} x {}", layout.cols, layout.rows))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Cell"),
        s.value
            .apply_to(format!("{}x{} px", layout.cell_width, layout.cell_height))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Spacing"),
        s.value.apply_to(format!("{} px", layout.spacing))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Size"),
        s.value
            .apply_to(format!("{}x{}", layout.total_width, layout.total_height))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!();
}
