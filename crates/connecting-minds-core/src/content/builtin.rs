//! Built-in site copy.

use super::card::{Card, DetailContent, DetailProducer};
use super::testimonial::Testimonial;

const TEMPLATES_LINK: &str = "https://ui.aceternity.com/templates";

/// The team testimonials, in display order.
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "As the Founder and Managing Director of Connecting Minds Business Center L.L.C, \
             Marina has been instrumental in shaping the company’s direction since its \
             establishment in 2022. With over nine years in the serviced office industry, she \
             leads business strategy, operations, and client experience with clarity and vision.",
            "Marina D’Souza",
            "Founder & Managing Director",
            "https://i.postimg.cc/WzLNcSg1/cm3.jpg",
        ),
        Testimonial::new(
            "Vijay is a strategic leader with over six years of experience in business support \
             services. He founded SAT Business Setup, which continues to assist entrepreneurs \
             across the UAE. At Connecting Minds, he plays a key leadership role: expanding \
             operations, launching four centers, and elevating service delivery.",
            "Vijay D’Souza",
            "Operational Manager",
            "https://i.postimg.cc/KcPqwsJV/11108269.png",
        ),
        Testimonial::new(
            "Nisha ensures smooth daily operations with expertise in office management and \
             client coordination. Recognized as Best New Employee of 2024, she is praised for her \
             professional, client-focused approach and seamless handling of center operations, \
             making her an essential asset to the team.",
            "Shashikala Nishadi",
            "Administrative Officer",
            "https://i.postimg.cc/BZHZB9fL/cm1.jpg",
        ),
        Testimonial::new(
            "Sourabh is a results-driven Sales Executive focused on flexible office solutions. \
             Starting in an administrative role, his outstanding performance and client service \
             earned him a promotion to sales. Over the past two years, he has helped boost \
             occupancy and client satisfaction through tailored workspace offerings and strong \
             relationship-building.",
            "Sourabh Badhan",
            "Sales Executive",
            "https://i.postimg.cc/PJWtXZQz/cm2.jpg",
        ),
    ]
}

/// The gallery cards, in display order.
///
/// Detail copy is built inside each producer so nothing is allocated until
/// a card is expanded.
pub fn cards() -> Vec<Card> {
    vec![
        Card::new(
            "Experience",
            "Luxury",
            "https://i.postimg.cc/0ywR25cP/image-1.jpg",
            TEMPLATES_LINK,
            DetailProducer::new(|| {
                DetailContent::paragraph([
                    "Meeting Room Rentals",
                    "Elevate your corporate image and leave a lasting impression with our \
                     cutting-edge meeting rooms! Designed to exude sophistication and luxury, our \
                     spaces are fully equipped and perfect for private meetings, powerful \
                     presentations, engaging training sessions, VIP gatherings, exclusive events.",
                ])
            }),
        ),
        Card::new(
            "Benefits",
            "of Renting",
            "https://i.postimg.cc/K8MjS2Tg/gk-v1SqN.jpg",
            TEMPLATES_LINK,
            DetailProducer::new(|| {
                DetailContent::paragraph([
                    "Rent a Meeting Room",
                    "Professional Reception: Our welcoming team is dedicated to making your guests \
                     feel at home from the moment they arrive. State-of-the-Art Facilities: Our \
                     business center is equipped with the latest technology, ergonomic furniture, \
                     and modern amenities to enhance your work experience. Effortless Booking: \
                     Choose the booking option that suits your schedule, whether by the hour or \
                     for the entire day.",
                ])
            }),
        ),
        Card::new(
            "Prime Location",
            "Garhoud",
            "https://i.postimg.cc/yNhNxyv1/UdDTEeNg.jpg",
            "https://i.postimg.cc/0Qc2d5Th/G-QP6d.jpg",
            DetailProducer::new(|| {
                DetailContent::paragraph([
                    "Convenience meets sophistication as Connecting Minds is strategically located \
                     in City Center Garhoud, providing easy access to major business and \
                     commercial landmarks. Our central position ensures that you are always \
                     well-connected, making business meetings, networking, and commuting a breeze.",
                ])
            }),
        ),
        Card::new(
            "Our",
            "Vision",
            "https://i.postimg.cc/K8MjS2Tg/gk-v1SqN.jpg",
            TEMPLATES_LINK,
            DetailProducer::new(|| {
                DetailContent::paragraph([
                    "At Connecting Minds, our mission is to create vibrant and flexible workspaces \
                     that empower businesses in Dubai to flourish. We are dedicated to cultivating \
                     a dynamic environment where entrepreneurs, startups, and established \
                     enterprises can collaborate, innovate, and achieve their goals. Join us and \
                     elevate your business experience in one of the world's most exciting cities!",
                ])
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_card_order() {
        let titles: Vec<_> = cards().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Experience", "Benefits", "Prime Location", "Our"]);
    }

    #[test]
    fn test_experience_detail_heading() {
        let experience = cards().remove(0);
        let detail = experience.produce_detail();
        assert_eq!(detail.paragraphs[0].lines[0], "Meeting Room Rentals");
    }

    #[test]
    fn test_builtin_testimonials() {
        let all = testimonials();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].name, "Marina D’Souza");
        assert_eq!(all[3].designation, "Sales Executive");
    }
}
