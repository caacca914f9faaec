use std::collections::HashMap;

use lazy_static::lazy_static;

/// The three mutually exclusive pages reachable from the navigation
/// selector. Selecting an informational page never touches the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    HeartDiseasePrediction,
    AboutThisApp,
    AboutMe,
}

/// Selector labels in display order.
pub const NAV_LABELS: [&str; 3] = ["Heart Disease Prediction", "About This App", "About Me"];

lazy_static! {
    static ref PAGES_BY_LABEL: HashMap<&'static str, Page> = {
        let mut m = HashMap::new();
        m.insert("Heart Disease Prediction", Page::HeartDiseasePrediction);
        m.insert("About This App", Page::AboutThisApp);
        m.insert("About Me", Page::AboutMe);
        m
    };
}

impl Page {
    /// Resolves a selector label; unknown labels resolve to nothing.
    pub fn from_label(label: &str) -> Option<Page> {
        PAGES_BY_LABEL.get(label).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::HeartDiseasePrediction => "Heart Disease Prediction",
            Page::AboutThisApp => "About This App",
            Page::AboutMe => "About Me",
        }
    }

    /// Static body text for the page. The prediction page's body is the
    /// form intro; the other two pages are body text and nothing else.
    pub fn body(&self) -> &'static str {
        match self {
            Page::HeartDiseasePrediction => PREDICTION_INTRO,
            Page::AboutThisApp => ABOUT_THIS_APP,
            Page::AboutMe => ABOUT_ME,
        }
    }
}

const PREDICTION_INTRO: &str = "\
# Heart Disease Prediction Form
This app predicts whether a person has heart disease based on several health parameters. Please fill in the form below with your health data.
Data obtained from the UCI Machine Learning Repository (https://archive.ics.uci.edu/ml/datasets/Heart+Disease).
";

const ABOUT_THIS_APP: &str = "\
## About This App
This Heart Disease Prediction App uses a machine learning model trained on the UCI Heart Disease dataset to predict the presence of heart disease based on user-provided health parameters.

### Features:
- User-friendly interface for inputting health data.
- Real-time prediction of heart disease risk.
- Educational resource for understanding heart disease indicators.

### Disclaimer:
This application is intended for educational purposes only and should not be used as a substitute for professional medical advice, diagnosis, or treatment. Always seek the advice of your physician or other qualified health provider with any questions you may have regarding a medical condition.

### Created by:
DQlab (www.dqlab.id)
";

const ABOUT_ME: &str = "\
## About the Developer
This Heart Disease Prediction App was developed by DQlab (www.dqlab.id), a leading platform for data science and machine learning education. DQlab is dedicated to empowering individuals with the skills and knowledge needed to excel in the field of data science through comprehensive courses, hands-on projects, and expert guidance.

### Our Mission:
- To provide high-quality education in data science and machine learning.
- To foster a community of learners and professionals passionate about data.
- To bridge the gap between theoretical knowledge and practical application.

### Connect with Us:
- Website: www.dqlab.id
- Social Media: follow @dqlab_id on Twitter, DQlab on LinkedIn and dqlab.id on Facebook for updates and resources.

Thank you for using our app! We hope it serves as a valuable tool in your journey to understanding heart disease risk factors.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_label_resolves() {
        for label in NAV_LABELS {
            let page = Page::from_label(label).unwrap();
            assert_eq!(page.label(), label);
        }
    }

    #[test]
    fn test_unknown_label_resolves_to_nothing() {
        assert_eq!(Page::from_label("Settings"), None);
        assert_eq!(Page::from_label(""), None);
    }

    #[test]
    fn test_informational_pages_have_body_text() {
        assert!(Page::AboutThisApp.body().contains("About This App"));
        assert!(Page::AboutMe.body().contains("About the Developer"));
    }
}
