use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    datatype::DataPointItem,
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{cohort::Cohort, error::AppError, student::Classification};
use crate::utils::debounce::debounced_resize_listener;

const CHART_ID: &str = "classification-chart";

type SeriesData = Result<(Vec<String>, Vec<usize>), AppError>;

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub cohort: Rc<Cohort>,
    pub dark_mode: bool,
}

/// Bar chart of the number of students per classification
#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.cohort.clone(), |cohort| cohort.series_data());

    {
        let container_ref = container_ref.clone();
        let dark_mode = props.dark_mode;

        use_effect_with(
            (series_data, container_ref, dark_mode),
            |(series_data, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, series_data, *dark_mode);

                    let series_data = series_data.clone();
                    let dark_mode = *dark_mode;
                    debounced_resize_listener(Config::RESIZE_DEBOUNCE_MS, move || {
                        render_chart(&container, &series_data, dark_mode);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series_data: &SeriesData, dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    match series_data {
        Ok(data) => {
            let chart = build_chart(data, dark_mode);
            if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
                web_sys::console::error_1(&format!("Render error: {e:?}").into());
            }
        }
        Err(e) => web_sys::console::error_1(&format!("Series data error: {e}").into()),
    }
}

fn build_chart(series_data: &(Vec<String>, Vec<usize>), dark_mode: bool) -> CharmingChart {
    let (labels, counts) = series_data;

    // Theme-aware colors
    let (title_color, axis_color, grid_color) = if dark_mode {
        ("#e4e4e7", "#a1a1aa", "#404040")
    } else {
        ("#1f2937", "#6b7280", "#e5e7eb")
    };

    // One bar per classification, colored like its badge
    let bars: Vec<DataPointItem> = Classification::all()
        .iter()
        .zip(counts)
        .map(|(c, &count)| {
            DataPointItem::new(count as f64).item_style(ItemStyle::new().color(c.color()))
        })
        .collect();

    CharmingChart::new()
        .title(
            Title::new()
                .text("Students by Classification")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels.clone())
                .axis_label(AxisLabel::new().color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Students")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Bar::new().data(bars).bar_width("50%"))
}
