//! Modal bodies for the "Learn More" buttons on the services and products pages.
//! Prices are in rand and are the published starting prices.

use super::{Block, Item, ModalContentEntry, Section};

pub static ENTRIES: &[ModalContentEntry] = &[
    ModalContentEntry {
        key: "body-handling",
        title: "Body Handling & Preparation",
        sections: &[
            Section {
                heading: "Professional Care When It Matters Most",
                body: Block::Paragraph(
                    "Our experienced team provides dignified and respectful body handling services 24 hours a day, 7 days a week. We understand the importance of treating your loved one with the utmost care during this difficult time.",
                ),
            },
            Section {
                heading: "What's Included",
                body: Block::List(&[
                    Item {
                        label: "24/7 Body Collection",
                        text: "Our professional staff is available around the clock to collect your loved one from the hospital, nursing home, or private residence.",
                    },
                    Item {
                        label: "Refrigeration Facilities",
                        text: "State-of-the-art temperature-controlled storage to preserve dignity.",
                    },
                    Item {
                        label: "Embalming Services",
                        text: "Professional embalming performed by certified embalmers following international standards.",
                    },
                    Item {
                        label: "Cosmetic Preparation",
                        text: "Careful restoration and presentation to ensure your loved one looks peaceful.",
                    },
                    Item {
                        label: "Dressing & Presentation",
                        text: "We dress your loved one in their chosen attire with care and respect.",
                    },
                    Item {
                        label: "Viewing Arrangements",
                        text: "Private viewing rooms available for family and friends.",
                    },
                ]),
            },
            Section {
                heading: "Our Process",
                body: Block::Paragraph(
                    "We follow strict protocols and guidelines to ensure the highest standards of care. Our team is trained in cultural sensitivity and can accommodate specific religious or cultural requirements.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Body handling and preparation services start from **R3,500**. Contact us for a detailed quote based on your specific needs.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "funeral-planning",
        title: "Funeral Planning Services",
        sections: &[
            Section {
                heading: "Comprehensive Planning Support",
                body: Block::Paragraph(
                    "Let our experienced funeral directors guide you through every step of the planning process. We handle all the details so you can focus on honoring your loved one's memory.",
                ),
            },
            Section {
                heading: "Services Include",
                body: Block::List(&[
                    Item {
                        label: "Initial Consultation",
                        text: "One-on-one meeting to discuss your wishes, budget, and specific requirements.",
                    },
                    Item {
                        label: "Death Certificate Processing",
                        text: "We handle all paperwork and liaise with Home Affairs on your behalf.",
                    },
                    Item {
                        label: "Burial or Cremation Coordination",
                        text: "Arrangements with cemeteries or crematoriums throughout Cape Town.",
                    },
                    Item {
                        label: "Venue Booking",
                        text: "Assistance in securing churches, halls, or other venues for the service.",
                    },
                    Item {
                        label: "Officiant Arrangements",
                        text: "Connection with religious leaders or celebrants.",
                    },
                    Item {
                        label: "Music & Multimedia",
                        text: "Setup of audio-visual equipment for music, slideshows, and video tributes.",
                    },
                ]),
            },
            Section {
                heading: "Personalization Options",
                body: Block::Paragraph(
                    "We believe every funeral should be as unique as the person being remembered. We can incorporate special music, readings, cultural traditions, and personal touches to create a meaningful ceremony.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Full funeral planning services start from **R5,000**. This includes consultation, coordination, and on-the-day management.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "vehicles-transport",
        title: "Vehicles & Transport",
        sections: &[
            Section {
                heading: "Dignified Transportation",
                body: Block::Paragraph(
                    "Our fleet of professional vehicles ensures a respectful and smooth journey for your loved one and family members.",
                ),
            },
            Section {
                heading: "Available Vehicles",
                body: Block::List(&[
                    Item {
                        label: "Traditional Hearses",
                        text: "Classic black Mercedes-Benz hearses for a timeless, dignified procession.",
                    },
                    Item {
                        label: "Modern Hearses",
                        text: "Contemporary vehicles for those preferring a more modern aesthetic.",
                    },
                    Item {
                        label: "Luxury Limousines",
                        text: "Comfortable transportation for immediate family members (seats 6-8).",
                    },
                    Item {
                        label: "Minibuses",
                        text: "Air-conditioned coaches for larger family groups (seats 14-20).",
                    },
                    Item {
                        label: "Motorcycle Hearse",
                        text: "Unique option for motorcycle enthusiasts - a dignified alternative.",
                    },
                ]),
            },
            Section {
                heading: "Professional Service",
                body: Block::Paragraph(
                    "All vehicles are maintained to the highest standards and driven by professional, uniformed chauffeurs who understand the importance of this journey.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Hearse rental starts from **R2,500**. Limousine and minibus packages available. Contact us for distance-based quotes.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "catering-services",
        title: "Catering Services",
        sections: &[
            Section {
                heading: "Thoughtful Catering for Memorial Gatherings",
                body: Block::Paragraph(
                    "Sharing a meal after a funeral service is an important part of the grieving process. Our catering services take the stress out of feeding your guests.",
                ),
            },
            Section {
                heading: "Menu Options",
                body: Block::List(&[
                    Item {
                        label: "Traditional South African Menu",
                        text: "Vetkoek, braaivleis, pap, stews, and salads.",
                    },
                    Item {
                        label: "Buffet Service",
                        text: "Hot and cold options including roasted meats, vegetable dishes, rice, and potatoes.",
                    },
                    Item {
                        label: "Tea & Coffee Service",
                        text: "Complete beverage service with tea, coffee, juice, and water.",
                    },
                    Item {
                        label: "Snack Platters",
                        text: "Sandwiches, wraps, samosas, and pastries for smaller gatherings.",
                    },
                    Item {
                        label: "Dietary Requirements",
                        text: "Vegetarian, vegan, halal, and kosher options available.",
                    },
                ]),
            },
            Section {
                heading: "Service Included",
                body: Block::Paragraph(
                    "Our catering package includes delivery, setup, serving staff (for larger events), and cleanup. Tables, chairs, and crockery can be provided if needed.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Catering starts from **R80 per person** for basic refreshments, **R150 per person** for full buffet service.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "floral-arrangements",
        title: "Floral Arrangements",
        sections: &[
            Section {
                heading: "Beautiful Floral Tributes",
                body: Block::Paragraph(
                    "Flowers bring comfort and beauty to funeral services. Our experienced florists create elegant arrangements that honor your loved one's memory.",
                ),
            },
            Section {
                heading: "Available Arrangements",
                body: Block::List(&[
                    Item {
                        label: "Casket Sprays",
                        text: "Large arrangements designed to rest on top of the casket.",
                    },
                    Item {
                        label: "Standing Wreaths",
                        text: "Circular or heart-shaped wreaths on easel stands.",
                    },
                    Item {
                        label: "Cross Tributes",
                        text: "Floral arrangements in the shape of crosses.",
                    },
                    Item {
                        label: "Bouquets & Sheaves",
                        text: "Hand-tied bouquets for family members to carry or place.",
                    },
                    Item {
                        label: "Single Stem Tributes",
                        text: "Individual roses for guests to place during the service.",
                    },
                    Item {
                        label: "Custom Designs",
                        text: "Personalized arrangements reflecting hobbies, interests, or favorite colors.",
                    },
                ]),
            },
            Section {
                heading: "Fresh, Seasonal Flowers",
                body: Block::Paragraph(
                    "We source fresh flowers locally and use seasonal blooms for the best quality. Popular choices include roses, lilies, carnations, gerberas, and proteas.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Floral arrangements start from **R500** for bouquets, **R1,500** for casket sprays, and **R2,000** for elaborate standing tributes.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "memorial-products",
        title: "Memorial Products",
        sections: &[
            Section {
                heading: "Lasting Tributes & Keepsakes",
                body: Block::Paragraph(
                    "Preserve precious memories with our range of memorial products, from urns to keepsake jewelry.",
                ),
            },
            Section {
                heading: "Product Range",
                body: Block::List(&[
                    Item {
                        label: "Cremation Urns",
                        text: "Available in ceramic, metal, wood, and biodegradable materials. Sizes from full-size to keepsake.",
                    },
                    Item {
                        label: "Memorial Jewelry",
                        text: "Pendants, bracelets, and rings that can hold a small amount of ashes or a fingerprint.",
                    },
                    Item {
                        label: "Photo Frames & Albums",
                        text: "Premium quality frames and memory albums for cherished photographs.",
                    },
                    Item {
                        label: "Headstones & Plaques",
                        text: "Custom engraved granite or bronze markers (see separate modal).",
                    },
                    Item {
                        label: "Memory Boxes",
                        text: "Beautiful wooden or metal boxes to store keepsakes and mementos.",
                    },
                    Item {
                        label: "Memorial Cards & Bookmarks",
                        text: "Professionally printed remembrance cards for distribution at services.",
                    },
                ]),
            },
            Section {
                heading: "Customization",
                body: Block::Paragraph(
                    "Most products can be personalized with names, dates, photos, or special messages. We offer laser engraving and photo printing services.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Urns from **R800**, memorial jewelry from **R500**, photo frames from **R200**, memory boxes from **R600**.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "event-management",
        title: "Event Management",
        sections: &[
            Section {
                heading: "Seamless Coordination",
                body: Block::Paragraph(
                    "Our event management team ensures every aspect of the funeral service runs smoothly, allowing you to focus on saying goodbye.",
                ),
            },
            Section {
                heading: "Management Services",
                body: Block::List(&[
                    Item {
                        label: "Guest Coordination",
                        text: "RSVP management, guest list compilation, and attendance tracking.",
                    },
                    Item {
                        label: "Seating Arrangements",
                        text: "Strategic seating plans for family, VIPs, and general guests.",
                    },
                    Item {
                        label: "Program Design",
                        text: "Creation and printing of order-of-service programs.",
                    },
                    Item {
                        label: "AV Equipment",
                        text: "Setup and operation of microphones, speakers, projectors, and screens.",
                    },
                    Item {
                        label: "Photography & Videography",
                        text: "Professional documentation of the service (if desired).",
                    },
                    Item {
                        label: "Timeline Management",
                        text: "Ensuring the service starts on time and flows smoothly.",
                    },
                    Item {
                        label: "Ushers & Assistants",
                        text: "Professional staff to guide guests and manage logistics.",
                    },
                ]),
            },
            Section {
                heading: "Day-of Coordination",
                body: Block::Paragraph(
                    "A dedicated coordinator will be present throughout the service to handle any issues, manage vendors, and ensure everything proceeds according to plan.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Event management services start from **R3,000** for basic coordination, **R8,000** for comprehensive management including AV and staff.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "grief-support",
        title: "Grief Support Resources",
        sections: &[
            Section {
                heading: "Supporting You Beyond the Funeral",
                body: Block::Paragraph(
                    "Grief doesn't end after the funeral. We provide resources and connections to help you and your family navigate the grieving process.",
                ),
            },
            Section {
                heading: "Support Services",
                body: Block::List(&[
                    Item {
                        label: "Grief Counseling Referrals",
                        text: "Connections to qualified grief counselors and therapists in Cape Town.",
                    },
                    Item {
                        label: "Support Groups",
                        text: "Information about local bereavement support groups and meetings.",
                    },
                    Item {
                        label: "Educational Materials",
                        text: "Booklets and resources explaining the grieving process and coping strategies.",
                    },
                    Item {
                        label: "Children's Resources",
                        text: "Age-appropriate materials to help children understand and process loss.",
                    },
                    Item {
                        label: "Follow-up Care",
                        text: "Check-in calls and emails at 1 month, 3 months, and 1 year anniversaries.",
                    },
                    Item {
                        label: "Memorial Reminders",
                        text: "Thoughtful remembrance messages on birthdays and anniversaries.",
                    },
                ]),
            },
            Section {
                heading: "Online Resources",
                body: Block::Paragraph(
                    "Access to our online portal with articles, videos, and guided meditations to support your healing journey.",
                ),
            },
            Section {
                heading: "Availability",
                body: Block::Paragraph(
                    "These support resources are provided **free of charge** to all families we serve. We're here for you long after the funeral ends.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "caskets-coffins",
        title: "Caskets & Coffins",
        sections: &[
            Section {
                heading: "Quality Caskets for Every Budget",
                body: Block::Paragraph(
                    "Choose from our wide selection of caskets and coffins, each crafted with dignity and respect. From simple and affordable to elegant and ornate, we have options to suit every preference and budget.",
                ),
            },
            Section {
                heading: "Available Options",
                body: Block::List(&[
                    Item {
                        label: "Solid Wood Caskets",
                        text: "Premium oak, mahogany, or pine with high-gloss finish. Includes brass or silver handles.",
                    },
                    Item {
                        label: "Veneer Caskets",
                        text: "Wood veneer over composite material - elegant appearance at a more affordable price.",
                    },
                    Item {
                        label: "Eco-Friendly Coffins",
                        text: "Biodegradable options made from bamboo, wicker, cardboard, or sustainable wood.",
                    },
                    Item {
                        label: "Metal Caskets",
                        text: "Steel or bronze caskets with protective seals for enhanced preservation.",
                    },
                    Item {
                        label: "Custom Options",
                        text: "Choice of interior lining (satin, velvet, cotton), colors, and hardware.",
                    },
                ]),
            },
            Section {
                heading: "Viewing Available",
                body: Block::Paragraph(
                    "Visit our showroom to view casket options in person and discuss customization. Our consultants will help you choose the perfect casket without pressure.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Coffins from **R3,000**, veneer caskets from **R8,000**, solid wood caskets from **R15,000**, metal caskets from **R20,000**.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "urns",
        title: "Cremation Urns",
        sections: &[
            Section {
                heading: "Beautiful Urns for Ashes",
                body: Block::Paragraph(
                    "Our collection of cremation urns offers families a meaningful way to preserve and honor their loved one's ashes.",
                ),
            },
            Section {
                heading: "Urn Collection",
                body: Block::List(&[
                    Item {
                        label: "Ceramic & Porcelain",
                        text: "Hand-painted designs, glazed finishes in various colors and patterns.",
                    },
                    Item {
                        label: "Metal Urns",
                        text: "Brass, bronze, and copper urns with engraved designs. Durable and elegant.",
                    },
                    Item {
                        label: "Wooden Urns",
                        text: "Crafted from oak, rosewood, or mahogany. Can be personalized with engraving.",
                    },
                    Item {
                        label: "Biodegradable Urns",
                        text: "For water or earth burial. Made from salt, sand, gelatin, or plant materials.",
                    },
                    Item {
                        label: "Keepsake Urns",
                        text: "Smaller urns for sharing ashes among family members. Perfect for memorial jewelry.",
                    },
                    Item {
                        label: "Custom Urns",
                        text: "Unique shapes including hearts, books, angels, or custom-designed pieces.",
                    },
                ]),
            },
            Section {
                heading: "Personalization",
                body: Block::Paragraph(
                    "Add names, dates, photos, or meaningful messages through laser engraving, photo transfer, or hand-painting.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Standard urns from **R800**, premium urns from **R2,500**, custom designs from **R4,000**, keepsake urns from **R300**.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "headstones",
        title: "Headstones & Grave Markers",
        sections: &[
            Section {
                heading: "Permanent Memorials",
                body: Block::Paragraph(
                    "Create a lasting tribute at the graveside with our custom-designed headstones and markers.",
                ),
            },
            Section {
                heading: "Monument Options",
                body: Block::List(&[
                    Item {
                        label: "Granite Headstones",
                        text: "Available in black, grey, pink, or red granite. Highly durable and weather-resistant.",
                    },
                    Item {
                        label: "Marble Monuments",
                        text: "Classic white or colored marble for an elegant appearance.",
                    },
                    Item {
                        label: "Bronze Plaques",
                        text: "Cast bronze markers mounted on granite bases. Traditional and timeless.",
                    },
                    Item {
                        label: "Flat Markers",
                        text: "Ground-level markers for cemeteries with restrictions on upright monuments.",
                    },
                    Item {
                        label: "Upright Monuments",
                        text: "Traditional standing headstones in various shapes and sizes.",
                    },
                    Item {
                        label: "Custom Designs",
                        text: "Unique shapes, religious symbols, or personalized artwork.",
                    },
                ]),
            },
            Section {
                heading: "Design Services",
                body: Block::Paragraph(
                    "Our designers will work with you to create a memorial that reflects your loved one's personality. We offer photo engraving, laser etching, hand-carving, and gold-leaf lettering.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Flat markers from **R5,000**, upright headstones from **R12,000**, custom monuments from **R25,000**. Installation included.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "funeral-programs",
        title: "Funeral Programs",
        sections: &[
            Section {
                heading: "Professional Service Programs",
                body: Block::Paragraph(
                    "Guide your guests through the funeral service with beautifully designed programs that honor your loved one's life.",
                ),
            },
            Section {
                heading: "Program Features",
                body: Block::List(&[
                    Item {
                        label: "Design Templates",
                        text: "Choose from dozens of professional templates or create a custom design.",
                    },
                    Item {
                        label: "Photo Layouts",
                        text: "Single or multiple photo options, including cover photos and photo collages.",
                    },
                    Item {
                        label: "Format Options",
                        text: "Bi-fold (4 pages), tri-fold (6 panels), or booklet (8-16 pages).",
                    },
                    Item {
                        label: "Content Sections",
                        text: "Order of service, obituary, life story, poem or prayer, pallbearers, acknowledgments.",
                    },
                    Item {
                        label: "Premium Printing",
                        text: "High-quality paper stock (matte or glossy), full-color printing.",
                    },
                ]),
            },
            Section {
                heading: "Design Process",
                body: Block::Paragraph(
                    "Provide us with photos, text, and any special requests. We'll create a proof for your approval before printing. Rush orders available.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Bi-fold programs from **R15 per copy**, tri-fold from **R20 per copy**, booklets from **R35 per copy**. Minimum order 25 copies.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "floral-tributes",
        title: "Floral Tributes",
        sections: &[
            Section {
                heading: "Express Your Sympathy with Flowers",
                body: Block::Paragraph(
                    "Fresh, beautiful floral arrangements to bring comfort and honor the memory of your loved one.",
                ),
            },
            Section {
                heading: "Tribute Options",
                body: Block::List(&[
                    Item {
                        label: "Sympathy Wreaths",
                        text: "Circular wreaths on easel stands - classic and dignified.",
                    },
                    Item {
                        label: "Standing Sprays",
                        text: "Tall arrangements designed for easel display at the service or graveside.",
                    },
                    Item {
                        label: "Casket Flowers",
                        text: "Full or half-casket sprays designed to drape over the casket.",
                    },
                    Item {
                        label: "Floral Garlands",
                        text: "Fresh flower garlands for traditional cultural ceremonies.",
                    },
                    Item {
                        label: "Single Stems",
                        text: "Roses or other flowers for guests to place individually during the service.",
                    },
                    Item {
                        label: "Delivery Included",
                        text: "We deliver directly to the venue or graveside.",
                    },
                ]),
            },
            Section {
                heading: "Seasonal Flowers",
                body: Block::Paragraph(
                    "We use the freshest seasonal blooms including roses, lilies, carnations, gerberas, chrysanthemums, and indigenous South African proteas.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Bouquets from **R500**, wreaths from **R1,200**, standing sprays from **R1,800**, casket sprays from **R2,500**.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "memorial-keepsakes",
        title: "Memorial Keepsakes",
        sections: &[
            Section {
                heading: "Keep Memories Close",
                body: Block::Paragraph(
                    "Cherish the memory of your loved one with personalized keepsakes that keep them close to your heart.",
                ),
            },
            Section {
                heading: "Keepsake Collection",
                body: Block::List(&[
                    Item {
                        label: "Memorial Jewelry",
                        text: "Pendants, bracelets, and rings that can hold ashes, hair, or fingerprints. Available in sterling silver and gold.",
                    },
                    Item {
                        label: "Fingerprint Keepsakes",
                        text: "Jewelry or ornaments featuring an actual fingerprint engraving.",
                    },
                    Item {
                        label: "Photo Frames",
                        text: "Premium wood or metal frames with optional engraving.",
                    },
                    Item {
                        label: "Memory Albums",
                        text: "Leather-bound books for photos, letters, and memories.",
                    },
                    Item {
                        label: "Memory Boxes",
                        text: "Beautiful wooden or metal boxes with compartments for treasured items.",
                    },
                    Item {
                        label: "Memorial Cards",
                        text: "Wallet-sized remembrance cards with photo and prayer.",
                    },
                ]),
            },
            Section {
                heading: "Personalization",
                body: Block::Paragraph(
                    "All keepsakes can be customized with names, dates, messages, photos, or fingerprints. Engraving completed within 5-7 business days.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Memorial cards from **R10 each**, photo frames from **R200**, jewelry from **R500**, memory boxes from **R600**.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "candles-decor",
        title: "Candles & Ceremonial Décor",
        sections: &[
            Section {
                heading: "Create a Peaceful Atmosphere",
                body: Block::Paragraph(
                    "Set the tone for a meaningful ceremony with our selection of candles, stands, and decorative elements.",
                ),
            },
            Section {
                heading: "Décor Items",
                body: Block::List(&[
                    Item {
                        label: "Memorial Candles",
                        text: "White pillar candles, taper candles, or votive candles. Available in various sizes.",
                    },
                    Item {
                        label: "LED Flameless Candles",
                        text: "Safe battery-operated candles with realistic flickering effect.",
                    },
                    Item {
                        label: "Candle Holders",
                        text: "Brass, silver, or glass holders and candelabras.",
                    },
                    Item {
                        label: "Pedestals & Stands",
                        text: "Display stands for photos, flowers, or the urn.",
                    },
                    Item {
                        label: "Fabric Draping",
                        text: "Elegant table runners and backdrop draping in white, cream, or chosen colors.",
                    },
                    Item {
                        label: "Memorial Guest Books",
                        text: "Beautiful bound books for guests to sign and leave messages.",
                    },
                    Item {
                        label: "Signage & Displays",
                        text: "Welcome signs, directional signs, and memory display boards.",
                    },
                ]),
            },
            Section {
                heading: "Rental or Purchase",
                body: Block::Paragraph(
                    "Most décor items are available for rental (returned after the service) or purchase (keep as a memorial item).",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Candles from **R50**, guest books from **R200**, pedestal rental from **R150**, fabric draping from **R500**.",
                ),
            },
        ],
    },
    ModalContentEntry {
        key: "digital-memorials",
        title: "Digital Memorial Pages",
        sections: &[
            Section {
                heading: "Online Memorials for the Digital Age",
                body: Block::Paragraph(
                    "Create a lasting online tribute that family and friends can visit from anywhere in the world to share memories and celebrate a life well-lived.",
                ),
            },
            Section {
                heading: "Digital Features",
                body: Block::List(&[
                    Item {
                        label: "Memorial Website",
                        text: "Personalized webpage with custom URL (e.g., inmemoryofname.com).",
                    },
                    Item {
                        label: "Photo Galleries",
                        text: "Upload unlimited photos organized in albums. Support for high-resolution images.",
                    },
                    Item {
                        label: "Video Tributes",
                        text: "Embed videos, slideshows, or livestream the funeral service.",
                    },
                    Item {
                        label: "Online Guestbook",
                        text: "Visitors can leave condolences, share memories, and light virtual candles.",
                    },
                    Item {
                        label: "Life Timeline",
                        text: "Interactive timeline showcasing important life events and milestones.",
                    },
                    Item {
                        label: "Social Sharing",
                        text: "Easy sharing to Facebook, Twitter, WhatsApp, and email.",
                    },
                    Item {
                        label: "QR Codes",
                        text: "Generate QR codes for headstones linking directly to the memorial page.",
                    },
                ]),
            },
            Section {
                heading: "Privacy & Control",
                body: Block::Paragraph(
                    "You control who can view and contribute to the memorial. Options for public, private, or password-protected pages.",
                ),
            },
            Section {
                heading: "Pricing",
                body: Block::Paragraph(
                    "Basic memorial page: **R500** (1 year hosting), Premium page with custom domain: **R1,500** (lifetime hosting).",
                ),
            },
        ],
    },
];
