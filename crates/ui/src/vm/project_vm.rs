use club_core::model::Project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCardVm {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category_label: &'static str,
}

#[must_use]
pub fn map_project_card(project: &Project) -> ProjectCardVm {
    ProjectCardVm {
        title: project.title.clone(),
        description: project.description.clone(),
        technologies: project.technologies.clone(),
        category_label: project.category.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::ClubCatalog;

    #[test]
    fn maps_category_label() {
        let catalog = ClubCatalog::seeded();
        let vm = map_project_card(&catalog.projects()[1]);
        assert_eq!(vm.title, "AI Study Companion");
        assert_eq!(vm.category_label, "AI");
        assert!(vm.technologies.contains(&"TensorFlow".to_string()));
    }
}
