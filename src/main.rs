use student_grades::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
