use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    dashboard::DashboardPage, not_found::NotFoundPage, student_detail::StudentDetailPage,
    student_list::StudentListPage,
};

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/students")]
    Students,
    #[at("/students/:student_id")]
    StudentDetail { student_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route of a student's detail page
    pub fn student(student_id: impl Into<String>) -> Self {
        Route::StudentDetail {
            student_id: student_id.into(),
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Students => html! { <StudentListPage /> },
        Route::StudentDetail { student_id } => html! { <StudentDetailPage {student_id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Dashboard.to_path(), "/");
        assert_eq!(Route::Students.to_path(), "/students");
        assert_eq!(Route::student("ST001").to_path(), "/students/ST001");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/students"), Some(Route::Students));
        assert_eq!(
            Route::recognize("/students/ST002"),
            Some(Route::student("ST002"))
        );
    }
}
